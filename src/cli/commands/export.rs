use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let store = super::open_store(cli, cfg)?;
        ExportLogic::export(&store, *format, Path::new(file), *force)?;
    }
    Ok(())
}
