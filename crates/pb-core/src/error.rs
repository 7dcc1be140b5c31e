//! Error types for pb-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pb-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV
    #[error("failed to parse CSV '{path}': {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row
    #[error("required column '{0}' is missing from the header")]
    MissingField(String),

    /// A row is too short for a referenced column position
    #[error("row has {len} fields, position {position} is out of range")]
    ShortRow { position: usize, len: usize },

    /// A phone field could not be rewritten into the canonical format
    #[error("cannot normalize phone number '{value}': {reason}")]
    PhoneFormat { value: String, reason: &'static str },

    /// Wraps an error with the 1-based data row it occurred on
    #[error("data row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<Error>,
    },

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attach a 1-based data row number to an error
    pub fn at_row(self, row: usize) -> Self {
        Error::Row {
            row,
            source: Box::new(self),
        }
    }
}
