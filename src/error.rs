//! Error types for results normalization.
//!
//! Every error in this crate is fatal to the run: normalization is a single
//! deterministic pass over a loaded table, so there is nothing to retry. The
//! only soft failure, an unknown rider name, is logged and never surfaces here.
//!
//! ## Error Categories
//!
//! - **File Errors**: the results or roster file cannot be read or written
//! - **Table Errors**: the tab-delimited content itself is malformed
//! - **Schema Errors**: a required column is absent
//! - **Timing Errors**: a lap time matches neither accepted pattern, or an
//!   assigned leg has no lap time at all
//!
//! ## Helper Constructors
//!
//! ```rust
//! use relay_splits::ResultsError;
//! use std::path::PathBuf;
//!
//! let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
//! let file_error = ResultsError::file_error(PathBuf::from("/path/to/results.txt"), io_err);
//! let time_error = ResultsError::time_format("1h02m");
//! let column_error = ResultsError::missing_column("roster", "Bib");
//!
//! for suggestion in time_error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for normalization operations.
pub type Result<T, E = ResultsError> = std::result::Result<T, E>;

/// Main error type for normalization operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResultsError {
    #[error("Results file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized elapsed time '{value}': expected H:MM:SS.f or MM:SS.f")]
    TimeFormat { value: String },

    #[error("Row {row} assigns leg {leg} to a rider but has no lap time for it")]
    MissingLapTime { row: usize, leg: usize },

    #[error("Required column '{column}' missing from {table} table")]
    MissingColumn { table: String, column: String },

    #[error("Malformed tab-delimited data in {context}")]
    Table {
        context: String,
        #[source]
        source: csv::Error,
    },
}

impl ResultsError {
    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ResultsError::File { .. } => vec![
                "Check file exists and is readable",
                "Check the output directory is writable",
                "Check file permissions",
            ],
            ResultsError::TimeFormat { .. } => vec![
                "Lap times must look like H:MM:SS.f or MM:SS.f",
                "Check the timing export did not round away the fractional part",
                "Fix the offending cell by hand and rerun",
            ],
            ResultsError::MissingLapTime { .. } => vec![
                "Every named leg needs a lap time in the matching Lap column",
                "Clear the Leg cell if the rider never rode that lap",
            ],
            ResultsError::MissingColumn { .. } => vec![
                "Check the header row spelling and capitalisation",
                "Check the file is tab delimited, not comma delimited",
            ],
            ResultsError::Table { .. } => vec![
                "Check the file is tab delimited with a header row",
                "Check for unbalanced quote characters",
                "Re-export the table as UTF-8 text",
            ],
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        ResultsError::File { path, source }
    }

    /// Helper constructor for unparseable elapsed-time text.
    pub fn time_format(value: impl Into<String>) -> Self {
        ResultsError::TimeFormat { value: value.into() }
    }

    /// Helper constructor for absent required columns.
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        ResultsError::MissingColumn { table: table.into(), column: column.into() }
    }

    /// Helper constructor for malformed tab-delimited content.
    pub fn table_error(context: impl Into<String>, source: csv::Error) -> Self {
        ResultsError::Table { context: context.into(), source }
    }
}

impl From<std::io::Error> for ResultsError {
    fn from(err: std::io::Error) -> Self {
        ResultsError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
