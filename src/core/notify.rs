//! Change notification channel between the store and its observers.
//!
//! Listeners run synchronously, in subscription order, after the store has
//! committed a mutation. A failing listener never undoes the mutation: the
//! failure is logged, recorded, and the remaining listeners still run.

use crate::models::StoreChange;
use log::error;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ListenerError(String);

impl ListenerError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Observer of committed store mutations.
pub trait EventListener {
    fn on_change(&mut self, change: &StoreChange) -> Result<(), ListenerError>;
}

impl<F> EventListener for F
where
    F: FnMut(&StoreChange) -> Result<(), ListenerError>,
{
    fn on_change(&mut self, change: &StoreChange) -> Result<(), ListenerError> {
        self(change)
    }
}

/// Listeners are shared so their owner can keep reading them while subscribed.
pub type SharedListener = Rc<RefCell<dyn EventListener>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// A listener error captured during delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    pub subscription: SubscriptionId,
    pub change: StoreChange,
    pub error: ListenerError,
}

#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, SharedListener)>,
    failures: Vec<ListenerFailure>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: SharedListener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver one change to a single listener.
    pub fn deliver(listener: &SharedListener, change: &StoreChange) -> Result<(), ListenerError> {
        match listener.try_borrow_mut() {
            Ok(mut l) => l.on_change(change),
            Err(_) => Err(ListenerError::new(
                "listener is already borrowed (re-entrant notification)",
            )),
        }
    }

    /// Deliver a change to every subscriber in subscription order.
    pub fn notify(&mut self, change: &StoreChange) {
        for (id, listener) in &self.entries {
            if let Err(e) = Self::deliver(listener, change) {
                error!(
                    "listener {} failed on {} of event #{}: {}",
                    id,
                    change.kind(),
                    change.event().id,
                    e
                );
                self.failures.push(ListenerFailure {
                    subscription: *id,
                    change: change.clone(),
                    error: e,
                });
            }
        }
    }

    pub fn take_failures(&mut self) -> Vec<ListenerFailure> {
        std::mem::take(&mut self.failures)
    }
}
