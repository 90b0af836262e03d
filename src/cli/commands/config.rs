use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = &cli.command {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        } else {
            println!("Configuration file: {}", path.display());
            println!("Use --print to show its content.");
        }
    }

    Ok(())
}
