//! Diagnostic logging bootstrap.
//!
//! The library logs through the `log` facade; the binary installs a
//! `flexi_logger` backend writing to stderr. Initialization happens at most
//! once per process and never panics.

use crate::errors::{AppError, AppResult};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

/// Environment variable that overrides the configured log spec.
pub const LOG_ENV_VAR: &str = "PLANNER_LOG";

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Pick the env override when set and non-empty, else the configured spec.
pub fn effective_spec(configured: &str) -> String {
    match std::env::var(LOG_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => configured.to_string(),
    }
}

/// Start the stderr logger with `spec`. Later calls are no-ops.
pub fn init_logging(spec: &str) -> AppResult<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let spec = effective_spec(spec);
    LOGGER.get_or_try_init(|| {
        Logger::try_with_str(&spec)
            .map_err(|e| AppError::Config(format!("invalid log level '{}': {}", spec, e)))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|e| AppError::Config(format!("failed to start logger: {}", e)))
    })?;

    debug!("logging started ({} v{})", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}
