//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sf_core::ReviewDate;

#[derive(Parser)]
#[command(
    name = "sf",
    version,
    about = "Static flashcards - review Q/A cards embedded in a text or HTML page",
    long_about = "Review flashcards written as Q:/A: paragraphs in a text or HTML page.\n\n\
                  Every card is due on first load; each day one due card is picked\n\
                  deterministically. A right answer doubles the interval, a wrong one\n\
                  schedules the card for tomorrow."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a card document and fail if any paragraph is malformed.
    Check(CheckArgs),

    /// List the cards due for review.
    Due(DeckArgs),

    /// Review due cards interactively.
    Review(DeckArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Card document (plain text or HTML).
    #[arg(value_name = "FILE", default_value = "index.html")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct DeckArgs {
    /// Card document (plain text or HTML).
    #[arg(value_name = "FILE", default_value = "index.html")]
    pub file: PathBuf,

    /// Review as of this date (YYYY-MM-DD) instead of the local date.
    #[arg(long = "today", value_name = "DATE")]
    pub today: Option<ReviewDate>,

    /// JSON file holding review state between runs.
    ///
    /// Loaded before the session starts and rewritten after every answer.
    /// Without it, every card starts out due.
    #[arg(long = "state", value_name = "PATH")]
    pub state: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
