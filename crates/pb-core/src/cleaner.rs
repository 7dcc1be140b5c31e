//! Whole-table cleaning: normalize every row, then fold duplicates

use crate::error::Result;
use crate::header::HeaderIndex;
use crate::merge::merge_duplicates;
use crate::normalize::normalize_row;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Counters describing one cleaning run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CleanStats {
    /// Data rows in the input table
    pub rows_read: usize,
    /// Data rows in the cleaned table
    pub rows_written: usize,
    /// Rows folded into an earlier record
    pub duplicates_merged: usize,
}

/// Clean a contact table.
///
/// Builds the header mapping, normalizes each data row independently, then
/// runs the sequential duplicate fold. The header row is carried through
/// unchanged and surviving rows keep the position of their first
/// contributing occurrence. Any failure aborts the run with the 1-based
/// number of the offending data row.
pub fn clean_table(table: &Table) -> Result<(Table, CleanStats)> {
    let header = HeaderIndex::new(&table.header)?;

    let mut normalized = Vec::with_capacity(table.rows.len());
    for (idx, raw) in table.rows.iter().enumerate() {
        let row = normalize_row(&header, raw).map_err(|e| e.at_row(idx + 1))?;
        normalized.push(row);
    }

    let unique = merge_duplicates(&header, &normalized)?;

    let stats = CleanStats {
        rows_read: table.rows.len(),
        rows_written: unique.len(),
        duplicates_merged: table.rows.len() - unique.len(),
    };

    let cleaned = Table {
        header: table.header.clone(),
        rows: unique,
        source_path: table.source_path.clone(),
    };

    Ok((cleaned, stats))
}
