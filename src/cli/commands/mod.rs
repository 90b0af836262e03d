pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod highlights;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock::{Clock, ManualClock, SystemClock};
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_timestamp;
use chrono::NaiveDate;

/// Clock for this invocation: the hidden `--now` override, or the system clock.
pub fn clock_for(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    match &cli.now {
        Some(now) => Ok(Box::new(ManualClock::new(parse_timestamp(now)?))),
        None => Ok(Box::new(SystemClock)),
    }
}

/// Open the configured database as an event store.
pub fn open_store(cli: &Cli, cfg: &Config) -> AppResult<EventStore> {
    EventStore::open(&cfg.database, clock_for(cli)?)
}

/// Days before `today` are read-only unless `allow_past` is set.
pub fn ensure_not_past(date: NaiveDate, today: NaiveDate, allow_past: bool) -> AppResult<()> {
    if date < today && !allow_past {
        return Err(AppError::validation(format!(
            "{} is in the past (today is {}); use --allow-past to change it anyway",
            date, today
        )));
    }
    Ok(())
}
