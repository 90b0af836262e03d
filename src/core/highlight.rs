//! Derived "which dates have events" index.
//!
//! The index only learns about events through store notifications. It never
//! queries the store and never hands out events, only date presence.

use crate::core::notify::{EventListener, ListenerError};
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::models::StoreChange;
use chrono::{Datelike, NaiveDate};
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// `date → number of live events on that date`. Dates whose count drops to
/// zero are removed, so `len()` is the number of highlighted dates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HighlightIndex {
    counts: HashMap<NaiveDate, usize>,
}

impl HighlightIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index seeded with the store's current content and keep it
    /// subscribed for every later mutation. On error the partially seeded
    /// index is dropped.
    pub fn attach(store: &mut EventStore) -> AppResult<Rc<RefCell<HighlightIndex>>> {
        let index = Rc::new(RefCell::new(HighlightIndex::new()));
        store.subscribe_with_snapshot(index.clone())?;
        Ok(index)
    }

    pub fn is_highlighted(&self, date: NaiveDate) -> bool {
        self.counts.contains_key(&date)
    }

    pub fn count(&self, date: NaiveDate) -> usize {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn highlighted_dates(&self) -> BTreeSet<NaiveDate> {
        self.counts.keys().copied().collect()
    }

    /// Highlighted dates of one calendar page, ascending.
    pub fn highlighted_in_month(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        let mut out: Vec<NaiveDate> = self
            .counts
            .keys()
            .filter(|d| d.year() == year && d.month() == month)
            .copied()
            .collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn increment(&mut self, date: NaiveDate) {
        *self.counts.entry(date).or_insert(0) += 1;
    }

    fn decrement(&mut self, date: NaiveDate) {
        if let Some(n) = self.counts.get_mut(&date) {
            *n -= 1;
            if *n == 0 {
                self.counts.remove(&date);
            }
        }
    }

    fn ensure_present(&self, date: NaiveDate) -> Result<(), ListenerError> {
        if self.is_highlighted(date) {
            Ok(())
        } else {
            Err(ListenerError::new(format!(
                "highlight index has no events on {} to remove",
                date
            )))
        }
    }
}

impl EventListener for HighlightIndex {
    fn on_change(&mut self, change: &StoreChange) -> Result<(), ListenerError> {
        match change {
            StoreChange::Added(e) => {
                self.increment(e.day());
            }
            StoreChange::Removed(e) => {
                self.ensure_present(e.day())?;
                self.decrement(e.day());
            }
            StoreChange::Edited { old, new } => {
                let (from, to) = (old.day(), new.day());
                if from != to {
                    self.ensure_present(from)?;
                    self.decrement(from);
                    self.increment(to);
                }
            }
        }
        Ok(())
    }
}
