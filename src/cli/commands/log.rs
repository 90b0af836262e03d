use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log) {
        let store = super::open_store(cli, cfg)?;
        LogLogic::print_log(store.pool())?;
    }

    Ok(())
}
