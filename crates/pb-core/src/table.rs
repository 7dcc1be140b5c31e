//! Core table type for representing contact list data

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A contact table: one header row plus zero or more data rows.
///
/// Rows are plain text fields and may be shorter or longer than the header;
/// normalization truncates long rows, and short rows fail only when a
/// required column position is actually accessed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in file order
    pub header: Vec<String>,
    /// Data rows (the header row is not included)
    pub rows: Vec<Vec<String>>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Table {
    /// Create a new empty table
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
            source_path,
        }
    }

    /// Get the number of header columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
