//! Command-line definitions.

use clap::{Parser, Subcommand, ValueEnum};
use date_span::Locale;

/// Count whole days between two calendar dates
#[derive(Parser, Debug)]
#[command(name = "date-span")]
#[command(version, about = "Count whole days between two calendar dates", long_about = None)]
pub struct Cli {
    /// Display locale for labels and counts
    #[arg(long, global = true, default_value = "ru-RU")]
    pub locale: Locale,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the day count between two dates
    Between {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD)
        end: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the long label of a date
    Label {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Edit the two dates line by line from stdin
    Interactive,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
