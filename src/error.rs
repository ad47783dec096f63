//! Error types for spreadsheet conversion

use std::path::PathBuf;
use thiserror::Error;

/// Table-level failure: aborts conversion of one input file
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to load table from {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

/// Row-level failure: the row is skipped, the table is still converted
///
/// `row` is the 0-based index of the data row (header excluded).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("malformed record at row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("non-finite number at row {row}, column '{column}'")]
    NonFiniteNumber { row: usize, column: String },
}
