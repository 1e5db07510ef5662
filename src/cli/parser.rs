use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rScorelog
/// CLI application to record one score per day and chart the trend
#[derive(Parser)]
#[command(
    name = "rscorelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple daily score journal CLI: record one score per day and view the trend",
    long_about = None
)]
pub struct Cli {
    /// Override journal file path (useful for tests or custom location)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the journal and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the recorded operations")]
        print: bool,
    },

    /// Add or update the score for a date
    Add {
        /// Date of the entry (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// Score in [1,10] (defaults to the configured default, normally 7)
        #[arg(long = "score", value_parser = clap::value_parser!(i32).range(1..=10))]
        score: Option<i32>,
    },

    /// List saved scores as a table, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "asc", help = "Oldest first instead of newest first")]
        asc: bool,
    },

    /// Draw the score trend as an ASCII line chart
    Chart {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Remove every entry from the journal
    Clear {
        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Create a backup copy of the journal file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export journal entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
