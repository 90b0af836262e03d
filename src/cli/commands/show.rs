use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = &cli.command {
        let store = super::open_store(cli, cfg)?;
        let event = store.get(*id)?.ok_or(AppError::NotFound(*id))?;

        println!("#{}", event.id);
        println!("Date:        {}", event.timestamp.format("%A, %B %-d, %Y"));
        println!("Time:        {}", event.time_str());
        println!("Description: {}", event.description);
    }

    Ok(())
}
