use clap::{Parser, ValueEnum};

/// Expand month/day shorthand into every calendar day it covers.
#[derive(Parser, Debug)]
#[command(
    name = "shorthand-dates",
    version,
    about = "Expand month/day shorthand like 12/30-1/2,6/7,7/8-10 into individual dates",
    after_help = "The comma-separated dates should not contain whitespace."
)]
pub struct Cli {
    /// Comma-separated tokens, each M/D, M/D-M/D or M/D-D.
    #[arg(value_name = "DATES")]
    pub dates: String,

    /// Year to resolve tokens against instead of the current local year.
    #[arg(long, env = "SHORTHAND_DATES_YEAR")]
    pub year: Option<u16>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `YYYY/MM/DD` date per line.
    Text,
    /// A JSON array with one array of dates per token.
    Json,
}
