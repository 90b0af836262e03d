use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing planner…");
    println!("🗄️  Database   : {}", &cfg.database);

    let store = super::open_store(cli, &cfg)?;

    println!("✅ Database initialized at {}", &cfg.database);

    if let Err(e) = log::ttlog(
        &store.pool().conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 planner initialization completed!");
    Ok(())
}
