use crate::export::ExportFormat;
use crate::models::window::Window;
use clap::{Parser, Subcommand};

/// Command-line interface definition for brewlogger
/// CLI application to log espresso brews with SQLite
#[derive(Parser)]
#[command(
    name = "brewlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple espresso brew journal: log each shot and review it by time window",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin "now" to a fixed local instant, format: YYYY-MM-DD HH:MM
    #[arg(global = true, long = "now", hide = true, value_name = "INSTANT")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values")]
        check: bool,
    },

    /// Manage the database (integrity check, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "last", value_name = "N", help = "Only the most recent N rows")]
        last: Option<usize>,
    },

    /// Log an espresso brew and show the refreshed list
    Add {
        /// Extraction weight in grams (e.g. 18.5)
        weight: f64,

        /// Extraction time in seconds (e.g. 28)
        time: f64,

        /// Grind time in seconds (e.g. 12.4)
        grind: f64,
    },

    /// List logged brews
    List {
        #[arg(
            long,
            short,
            value_enum,
            help = "Time window: today, week or all (default from config)"
        )]
        window: Option<Window>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export logged brews
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_enum,
            help = "Restrict the export to a time window (default: all)"
        )]
        window: Option<Window>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
