//! Name field splitting and patronymic detection
//!
//! Free-form name data may arrive with all parts crammed into one field, or
//! spread across the wrong ones. The tokens of the combined
//! lastname/firstname/patronymic text are redistributed: a trailing
//! patronymic goes to the patronymic column, the rest fill the leading row
//! slots in order.

use crate::error::{Error, Result};
use crate::header::HeaderIndex;
use regex::Regex;
use std::sync::LazyLock;

// At least 3 characters followed by one of the two common Russian
// patronymic endings, case-insensitively.
static PATRONYMIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i).{3}(вич|вна)$").expect("valid patronymic pattern"));

/// True if a token looks like a Russian patronymic (at least 6 characters,
/// ending in `вич` or `вна`)
pub fn is_patronymic(token: &str) -> bool {
    PATRONYMIC_SUFFIX.is_match(token)
}

/// Redistribute the name tokens of a row.
///
/// Tokens are read from `raw` (the untruncated input row) at the
/// lastname/firstname/patronymic header positions and written into `row`
/// (the truncated output row): a detected trailing patronymic to the
/// patronymic column, the survivors to row slots 0, 1, … in order.
///
/// The survivors target physical slots, not the header-resolved name
/// positions; with headers that do not start with lastname/firstname the
/// tokens land in whatever columns come first.
///
/// Slots beyond the surviving tokens keep their previous values.
pub fn reassign_names(header: &HeaderIndex, raw: &[String], row: &mut [String]) -> Result<()> {
    let mut tokens: Vec<&str> = Vec::new();
    for position in [header.lastname(), header.firstname(), header.surname()] {
        let field = raw.get(position).ok_or(Error::ShortRow {
            position,
            len: raw.len(),
        })?;
        tokens.extend(field.split_whitespace());
    }

    if let Some(&last) = tokens.last() {
        if is_patronymic(last) {
            let position = header.surname();
            let len = row.len();
            let slot = row
                .get_mut(position)
                .ok_or(Error::ShortRow { position, len })?;
            *slot = last.to_string();
            tokens.pop();
        }
    }

    for (position, token) in tokens.iter().enumerate() {
        let len = row.len();
        let slot = row
            .get_mut(position)
            .ok_or(Error::ShortRow { position, len })?;
        *slot = token.to_string();
    }

    Ok(())
}
