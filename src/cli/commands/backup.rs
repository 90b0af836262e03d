use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
    {
        let store = super::open_store(cli, cfg)?;
        BackupLogic::backup(&store, Path::new(file), *compress, *force)?;
    }

    Ok(())
}
