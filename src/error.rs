//! Error types for jsonbrowser
//!
//! Uses `thiserror` for library errors. The `Display` text of each variant is
//! exactly what the binary prints before exiting.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::SelectionError;
use crate::presentation::cli::USAGE;

/// Result type alias for jsonbrowser operations
pub type BrowseResult<T> = Result<T, BrowseError>;

/// Main error type for jsonbrowser operations
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Wrong number of arguments or an unknown flag
    #[error("{}", USAGE)]
    Usage,

    /// The JSON file could not be read
    #[error("Error reading file: {0}")]
    FileRead(#[source] std::io::Error),

    /// The file content is not valid JSON
    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// An explicitly requested config file could not be loaded
    #[error("Error loading config {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// The menu widget failed; ends the whole navigation session
    #[error("Error: {0}")]
    Selection(#[from] SelectionError),
}

impl BrowseError {
    /// Process exit status for this error.
    ///
    /// Startup failures exit with 1. A selection failure ends an interactive
    /// session that did start, which is not a failure of the program.
    pub fn exit_code(&self) -> i32 {
        match self {
            BrowseError::Selection(_) => 0,
            BrowseError::Usage
            | BrowseError::FileRead(_)
            | BrowseError::Parse(_)
            | BrowseError::Config { .. } => 1,
        }
    }
}
