//! Directory scanner for discovering contact list CSV files

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scan one or more directories for CSV files.
///
/// Returns the discovered paths sorted, so batch runs process files in a
/// stable order regardless of filesystem iteration.
pub fn find_contact_files<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in roots {
        for entry in WalkDir::new(root.as_ref()).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}
