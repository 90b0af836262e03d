use super::event::Event;
use serde::Serialize;

/// Notification payload emitted by the store after a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StoreChange {
    Added(Event),
    Edited { old: Event, new: Event },
    Removed(Event),
}

impl StoreChange {
    /// Operation name, also used as the audit-log `operation` column.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreChange::Added(_) => "add",
            StoreChange::Edited { .. } => "edit",
            StoreChange::Removed(_) => "del",
        }
    }

    /// The event as it exists after the change (the removed event for `Removed`).
    pub fn event(&self) -> &Event {
        match self {
            StoreChange::Added(e) | StoreChange::Removed(e) => e,
            StoreChange::Edited { new, .. } => new,
        }
    }
}
