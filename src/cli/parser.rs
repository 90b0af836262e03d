use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for planner.
#[derive(Parser, Debug)]
#[command(
    name = "planner",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small personal planner: attach notes to calendar dates and times, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is this `YYYY-MM-DD HH:MM`
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log,

    /// Add an event
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Time of the event (HH:MM, defaults to the configured default_time)
        #[arg(long = "time", short = 't')]
        time: Option<String>,

        /// Description of the event
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        #[arg(long = "allow-past", help = "Allow changes on dates before today")]
        allow_past: bool,
    },

    /// Edit an existing event
    Edit {
        /// Event id
        id: i64,

        #[arg(long = "date", help = "New date (YYYY-MM-DD), time unchanged")]
        date: Option<String>,

        #[arg(long = "time", help = "New time (HH:MM), date unchanged")]
        time: Option<String>,

        #[arg(long = "desc", help = "New description")]
        desc: Option<String>,

        #[arg(long = "allow-past", help = "Allow changes on dates before today")]
        allow_past: bool,
    },

    /// Delete an event
    Del {
        /// Event id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,

        #[arg(long = "allow-past", help = "Allow changes on dates before today")]
        allow_past: bool,
    },

    /// Show a single event
    Show {
        /// Event id
        id: i64,
    },

    /// List events on a day, or from today onward
    List {
        #[arg(long = "day", help = "Only events on this date (YYYY-MM-DD)")]
        day: Option<String>,
    },

    /// Show which dates of a month have events
    Highlights {
        #[arg(long = "month", help = "Month to show (YYYY-MM), default current month")]
        month: Option<String>,
    },

    /// Import a legacy JSON planner file
    Import {
        /// Path of the legacy JSON file
        file: String,
    },

    /// Export all events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
