//! JSON report for a cleaning run

use crate::cleaner::CleanStats;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A record of one cleaning run, written next to the output for auditing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanReport {
    /// When the run finished
    pub timestamp: DateTime<Utc>,
    /// File that was cleaned
    pub input: PathBuf,
    /// File the cleaned table was written to
    pub output: PathBuf,
    /// Data rows in the input
    pub rows_read: usize,
    /// Data rows in the output
    pub rows_written: usize,
    /// Rows folded into an earlier record
    pub duplicates_merged: usize,
}

impl CleanReport {
    /// Create a report for a finished run
    pub fn new(input: PathBuf, output: PathBuf, stats: &CleanStats) -> Self {
        Self {
            timestamp: Utc::now(),
            input,
            output,
            rows_read: stats.rows_read,
            rows_written: stats.rows_written,
            duplicates_merged: stats.duplicates_merged,
        }
    }

    /// Save the report as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let stats = CleanStats {
            rows_read: 10,
            rows_written: 7,
            duplicates_merged: 3,
        };
        let report = CleanReport::new(
            PathBuf::from("contacts.csv"),
            PathBuf::from("phonebook.csv"),
            &stats,
        );

        let json = serde_json::to_string_pretty(&report).unwrap();
        let loaded: CleanReport = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.rows_read, 10);
        assert_eq!(loaded.rows_written, 7);
        assert_eq!(loaded.duplicates_merged, 3);
        assert_eq!(loaded.input, PathBuf::from("contacts.csv"));
    }

    #[test]
    fn test_report_save() {
        let stats = CleanStats {
            rows_read: 2,
            rows_written: 1,
            duplicates_merged: 1,
        };
        let report = CleanReport::new(
            PathBuf::from("contacts.csv"),
            PathBuf::from("phonebook.csv"),
            &stats,
        );

        let path = std::env::temp_dir().join("pb-report-test.json");
        report.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"duplicates_merged\": 1"));

        let _ = fs::remove_file(&path);
    }
}
