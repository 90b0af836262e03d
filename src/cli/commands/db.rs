use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Red};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = &cli.command
    {
        // opening the store already runs pending migrations
        let store = super::open_store(cli, cfg)?;
        let pool = store.pool();

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}", Cyan.paint("▶ Running migrations…"));
            run_pending_migrations(&pool.conn)?;
            println!("{}\n", Green.paint("✔ Migration completed."));
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}", Cyan.paint("▶ Running integrity check…"));

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}\n", Green.paint("✔ Integrity check passed."));
            } else {
                println!("{} {}\n", Red.paint("✘ Integrity check failed:"), integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}", Cyan.paint("▶ Running VACUUM…"));
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}\n", Green.paint("✔ Vacuum completed."));
        }
    }

    Ok(())
}
