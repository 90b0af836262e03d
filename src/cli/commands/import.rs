use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::import::import_file;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = &cli.command {
        let default_time = cfg.default_time()?;
        let mut store = super::open_store(cli, cfg)?;

        info(format!("Importing legacy planner file: {}", file));
        let report = import_file(&mut store, Path::new(file), default_time)?;

        success(format!("Imported {} events.", report.imported));
        if report.skipped > 0 {
            warning(format!("Skipped {} empty entries.", report.skipped));
        }
    }

    Ok(())
}
