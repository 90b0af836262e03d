use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::highlight::HighlightIndex;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date_arg;
use crate::utils::time::parse_optional_time;

/// Add an event on a date, at the given or the configured default time.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        description,
        allow_past,
    } = &cli.command
    {
        //
        // 1. Parse date (mandatory) and time (optional)
        //
        let d = parse_date_arg(date)?;
        let t = match parse_optional_time(time.as_ref())? {
            Some(t) => t,
            None => cfg.default_time()?,
        };

        //
        // 2. Open the store, refuse past days, attach a live highlight index
        //
        let mut store = super::open_store(cli, cfg)?;
        super::ensure_not_past(d, store.today(), *allow_past)?;
        let index = HighlightIndex::attach(&mut store)?;
        let was_highlighted = index.borrow().is_highlighted(d);

        //
        // 3. Add
        //
        let event = store.add_at(d.and_time(t), &description.join(" "))?;

        success(format!("Added #{}: {}", event.id, event.long_form()));
        if !was_highlighted && index.borrow().is_highlighted(event.day()) {
            info(format!("{} is now marked on the calendar.", event.day()));
        }
    }

    Ok(())
}
