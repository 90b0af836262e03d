use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date_arg;
use crate::utils::time::parse_optional_time;

/// Edit date, time and/or description of an event. Date and time are
/// combined with the other half of the current timestamp.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        time,
        desc,
        allow_past,
    } = &cli.command
    {
        if date.is_none() && time.is_none() && desc.is_none() {
            return Err(AppError::validation(
                "nothing to edit: pass --date, --time and/or --desc",
            ));
        }

        let new_date = date.as_deref().map(parse_date_arg).transpose()?;
        let new_time = parse_optional_time(time.as_ref())?;

        let mut store = super::open_store(cli, cfg)?;
        let current = store.get(*id)?.ok_or(AppError::NotFound(*id))?;
        super::ensure_not_past(current.day(), store.today(), *allow_past)?;

        let timestamp = match (new_date, new_time) {
            (None, None) => None,
            (d, t) => Some(
                d.unwrap_or(current.day())
                    .and_time(t.unwrap_or(current.timestamp.time())),
            ),
        };

        if let Some(ts) = timestamp {
            super::ensure_not_past(ts.date(), store.today(), *allow_past)?;
        }

        let updated = store.edit_at(*id, timestamp, desc.as_deref())?;

        success(format!("Updated #{}: {}", updated.id, updated.long_form()));
        if updated.day() != current.day() {
            info(format!("Moved from {} to {}.", current.day(), updated.day()));
        }
    }

    Ok(())
}
