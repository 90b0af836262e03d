//! The event store: durable events keyed by timestamp.
//!
//! Every mutation runs inside one SQLite transaction (data change plus an
//! audit-log row). Listeners are notified only after the commit succeeded,
//! so a failed write is never announced and a notified change is always
//! on disk.

use crate::core::clock::Clock;
use crate::core::notify::{
    ListenerError, ListenerFailure, Listeners, SharedListener, SubscriptionId,
};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::event::validate_description;
use crate::models::{Event, StoreChange};
use crate::utils::date::{day_bounds, midnight};
use crate::utils::time::{normalize_timestamp, parse_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

pub struct EventStore {
    pool: DbPool,
    clock: Box<dyn Clock>,
    listeners: Listeners,
}

impl EventStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str, clock: Box<dyn Clock>) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool, clock)
    }

    pub fn open_in_memory(clock: Box<dyn Clock>) -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        Self::from_pool(pool, clock)
    }

    fn from_pool(pool: DbPool, clock: Box<dyn Clock>) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            clock,
            listeners: Listeners::new(),
        })
    }

    /// Today according to the store's clock, read fresh on each call.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Add an event from a textual timestamp (`YYYY-MM-DD HH:MM`).
    pub fn add(&mut self, timestamp: &str, description: &str) -> AppResult<Event> {
        let ts = parse_timestamp(timestamp)?;
        self.add_at(ts, description)
    }

    /// Add an event at an already parsed timestamp (truncated to the minute).
    pub fn add_at(&mut self, timestamp: NaiveDateTime, description: &str) -> AppResult<Event> {
        let timestamp = normalize_timestamp(timestamp)?;
        let description = validate_description(description)?;

        let tx = self.pool.conn.transaction()?;
        let id = queries::insert_event(&tx, &timestamp, &description)?;
        let event = Event {
            id,
            timestamp,
            description,
        };
        ttlog(&tx, "add", &format!("#{}", id), &event.long_form())?;
        tx.commit()?;

        debug!("added event #{} at {}", event.id, event.timestamp_str());
        self.listeners.notify(&StoreChange::Added(event.clone()));
        Ok(event)
    }

    /// Edit an event; `None` fields are left unchanged.
    pub fn edit(
        &mut self,
        id: i64,
        timestamp: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Event> {
        let ts = timestamp.map(parse_timestamp).transpose()?;
        self.edit_at(id, ts, description)
    }

    pub fn edit_at(
        &mut self,
        id: i64,
        timestamp: Option<NaiveDateTime>,
        description: Option<&str>,
    ) -> AppResult<Event> {
        let timestamp = timestamp.map(normalize_timestamp).transpose()?;
        let description = description.map(validate_description).transpose()?;

        let tx = self.pool.conn.transaction()?;
        let old = queries::find_event(&tx, id)?.ok_or(AppError::NotFound(id))?;

        let new = Event {
            id,
            timestamp: timestamp.unwrap_or(old.timestamp),
            description: description.unwrap_or_else(|| old.description.clone()),
        };

        if queries::update_event(&tx, &new)? == 0 {
            return Err(AppError::NotFound(id));
        }
        ttlog(
            &tx,
            "edit",
            &format!("#{}", id),
            &format!("{} → {}", old.long_form(), new.long_form()),
        )?;
        tx.commit()?;

        debug!("edited event #{}", id);
        self.listeners.notify(&StoreChange::Edited {
            old,
            new: new.clone(),
        });
        Ok(new)
    }

    /// Delete an event and hand it back so callers know which day to re-check.
    pub fn remove(&mut self, id: i64) -> AppResult<Event> {
        let tx = self.pool.conn.transaction()?;
        let event = queries::find_event(&tx, id)?.ok_or(AppError::NotFound(id))?;

        if queries::delete_event(&tx, id)? == 0 {
            return Err(AppError::NotFound(id));
        }
        ttlog(&tx, "del", &format!("#{}", id), &event.long_form())?;
        tx.commit()?;

        debug!("removed event #{}", id);
        self.listeners.notify(&StoreChange::Removed(event.clone()));
        Ok(event)
    }

    /// Append a free-form row to the audit log (used by import/backup).
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
    }

    // ---------------------------
    // Queries
    // ---------------------------

    pub fn get(&self, id: i64) -> AppResult<Option<Event>> {
        queries::find_event(&self.pool.conn, id)
    }

    /// Events from today's midnight onward. "Today" is read from the clock
    /// on every call.
    pub fn list_from_now(&self) -> AppResult<Vec<Event>> {
        let start = midnight(self.clock.today());
        queries::load_events_from(&self.pool.conn, &start)
    }

    /// Events in `[midnight(date), midnight(date) + 1 day)`.
    pub fn list_on_day(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        match day_bounds(date) {
            (start, Some(end)) => queries::load_events_between(&self.pool.conn, &start, &end),
            (start, None) => queries::load_events_from(&self.pool.conn, &start),
        }
    }

    pub fn list_all(&self) -> AppResult<Vec<Event>> {
        queries::load_all_events(&self.pool.conn)
    }

    // ---------------------------
    // Subscriptions
    // ---------------------------

    pub fn subscribe(&mut self, listener: SharedListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Replay every stored event to `listener` as `Added`, then subscribe it.
    ///
    /// Nothing is registered if the replay fails. The listener keeps
    /// whatever it received before the failing change, so callers should
    /// drop it (or reset it) rather than subscribe the same handle again.
    pub fn subscribe_with_snapshot(&mut self, listener: SharedListener) -> AppResult<SubscriptionId> {
        for event in self.list_all()? {
            Listeners::deliver(&listener, &StoreChange::Added(event))
                .map_err(|e| ListenerError::new(format!("snapshot replay failed: {}", e)))?;
        }
        Ok(self.listeners.subscribe(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Listener errors recorded since the last call.
    pub fn take_listener_failures(&mut self) -> Vec<ListenerFailure> {
        self.listeners.take_failures()
    }
}
