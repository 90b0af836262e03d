//! Unified application error type.
//! Store, db, import/export and cli all return AppError so callers
//! can tell validation problems from missing ids and storage failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Caller mistakes (store state unchanged)
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Import / export formats
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Notification listeners
    // ---------------------------
    #[error("Listener error: {0}")]
    Listener(#[from] crate::core::notify::ListenerError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Shorthand used by the parsers.
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// True for storage-level failures (the store refused to apply a change).
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, AppError::Db(_) | AppError::Migration(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
