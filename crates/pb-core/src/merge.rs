//! Duplicate folding for normalized contact rows
//!
//! Two rows describe the same person when their name tokens plausibly fit
//! one identity and none of their fields contradict each other. Merging is a
//! single greedy pass: each incoming row joins the first compatible entry
//! already in the output, otherwise it starts a new one.

use crate::error::{Error, Result};
use crate::header::HeaderIndex;
use std::collections::BTreeSet;

/// Decide whether two rows can be folded into one record.
///
/// Holds iff the rows are not byte-for-byte identical, their combined
/// distinct non-empty name tokens number at most 3, and no column position
/// holds two different non-empty values (compared over the common length).
pub fn is_mergeable(header: &HeaderIndex, a: &[String], b: &[String]) -> Result<bool> {
    if a == b {
        return Ok(false);
    }

    let mut tokens: BTreeSet<&str> = BTreeSet::new();
    collect_name_tokens(header, a, &mut tokens)?;
    collect_name_tokens(header, b, &mut tokens)?;
    if tokens.len() > 3 {
        return Ok(false);
    }

    Ok(a.iter()
        .zip(b.iter())
        .all(|(x, y)| x.is_empty() || y.is_empty() || x == y))
}

/// Fold two mergeable rows: for every recognized column, the incoming row's
/// value wins when non-empty, else the base row's value stays.
pub fn merge_pair(header: &HeaderIndex, base: &[String], incoming: &[String]) -> Result<Vec<String>> {
    let mut result = base.to_vec();
    for position in 0..header.len() {
        let value = incoming.get(position).ok_or(Error::ShortRow {
            position,
            len: incoming.len(),
        })?;
        if !value.is_empty() {
            let len = result.len();
            let slot = result
                .get_mut(position)
                .ok_or(Error::ShortRow { position, len })?;
            *slot = value.clone();
        }
    }
    Ok(result)
}

/// Fold a sequence of rows, keeping the first-seen position of each record.
///
/// Rows are processed in input order; each one merges into the first
/// existing output entry it is mergeable with (first match wins, not best
/// match), or is appended as a new entry. Later rows can merge into entries
/// produced by earlier merges, so the pass is strictly sequential.
pub fn merge_duplicates(header: &HeaderIndex, rows: &[Vec<String>]) -> Result<Vec<Vec<String>>> {
    let mut unique: Vec<Vec<String>> = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let mut merged = false;
        for entry in unique.iter_mut() {
            if is_mergeable(header, row, entry).map_err(|e| e.at_row(idx + 1))? {
                *entry = merge_pair(header, entry, row).map_err(|e| e.at_row(idx + 1))?;
                merged = true;
                break;
            }
        }
        if !merged {
            unique.push(row.clone());
        }
    }

    Ok(unique)
}

fn collect_name_tokens<'a>(
    header: &HeaderIndex,
    row: &'a [String],
    tokens: &mut BTreeSet<&'a str>,
) -> Result<()> {
    for position in [header.lastname(), header.firstname(), header.surname()] {
        let field = row.get(position).ok_or(Error::ShortRow {
            position,
            len: row.len(),
        })?;
        tokens.extend(field.split_whitespace());
    }
    Ok(())
}
