use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::highlight::HighlightIndex;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        id,
        yes,
        allow_past,
    } = &cli.command
    {
        let mut store = super::open_store(cli, cfg)?;

        let event = store.get(*id)?.ok_or(AppError::NotFound(*id))?;
        super::ensure_not_past(event.day(), store.today(), *allow_past)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete event #{} ({})? This action is irreversible.",
                event.id,
                event.long_form()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let index = HighlightIndex::attach(&mut store)?;
        let removed = store.remove(*id)?;

        success(format!("Event #{} has been deleted.", removed.id));
        if !index.borrow().is_highlighted(removed.day()) {
            info(format!("No events left on {}.", removed.day()));
        }
    }

    Ok(())
}
