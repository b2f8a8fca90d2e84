//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Exactly one positional argument, the JSON file
//! - Any argument error maps to the one-line usage message and exit status 1,
//!   not clap's own error report

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::{BrowseError, BrowseResult};

/// One-line usage message printed for argument errors.
pub const USAGE: &str = "Usage: jsonbrowser <json-file>";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// jsonbrowser - Interactive terminal browser for JSON documents
#[derive(Parser, Debug)]
#[command(name = "jsonbrowser")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Use the arrow keys to move, Enter to open an entry, and the Back entry to go up.")]
pub struct Cli {
    /// JSON file to browse
    pub file: PathBuf,

    /// Configuration file (defaults to the user config file)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show object members sorted by key
    #[arg(long)]
    pub sort_keys: bool,

    /// Number of menu rows visible at once
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command-line arguments.
///
/// Help and version requests come back as the clap error so the caller can
/// print them and exit successfully; every other failure is `Usage`.
pub fn parse_args<I, T>(args: I) -> Result<Cli, ArgsOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsOutcome::Info(err),
        _ => ArgsOutcome::Invalid(BrowseError::Usage),
    })
}

/// Why argument parsing did not produce a `Cli`.
#[derive(Debug)]
pub enum ArgsOutcome {
    /// `--help` or `--version`: print and exit 0
    Info(clap::Error),
    /// Anything else
    Invalid(BrowseError),
}

impl ArgsOutcome {
    pub fn into_result(self) -> BrowseResult<clap::Error> {
        match self {
            ArgsOutcome::Info(info) => Ok(info),
            ArgsOutcome::Invalid(err) => Err(err),
        }
    }
}
