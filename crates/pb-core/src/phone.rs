//! Phone number canonicalization
//!
//! Rewrites free-form Russian phone numbers into the fixed shape
//! `+7(AAA)EEE-LL-LL`, optionally followed by `" доб.NNNN"` when the raw
//! value carries an extension.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Literal marker separating the main number from a trailing extension
pub const EXTENSION_MARKER: &str = "доб.";

// Optional "+", an optional single trunk digit, then the 3-3-2-2 digit groups
// with arbitrary whitespace/hyphen/parenthesis separators. Anchored at the
// start; trailing text after the last group is ignored.
static MAIN_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[\s\-]*\d?[\s\-(]*(\d{3})[\s\-)]*(\d{3})[\s\-]*(\d{2})[\s\-]*(\d{2})")
        .expect("valid main number pattern")
});

// The last run of 4 consecutive digits anywhere in the extension segment.
static EXTENSION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^.*(\d{4})").expect("valid extension pattern"));

/// Rewrite a raw phone string into the canonical format.
///
/// An empty input is passed through unchanged. Anything else must contain a
/// 10-digit subscriber number (after an optional `+` and trunk digit), and,
/// when the extension marker is present, a 4-digit extension code.
pub fn normalize_phone(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let mut segments = raw.split(EXTENSION_MARKER);
    let main = segments.next().unwrap_or(raw);

    let caps = MAIN_NUMBER.captures(main).ok_or_else(|| Error::PhoneFormat {
        value: raw.to_string(),
        reason: "no 10-digit subscriber number found",
    })?;

    let mut formatted = format!("+7({}){}-{}-{}", &caps[1], &caps[2], &caps[3], &caps[4]);

    // Only the segment right after the first marker is consulted; any
    // further marked segments are ignored.
    if let Some(extension) = segments.next() {
        let code = EXTENSION_CODE
            .captures(extension)
            .ok_or_else(|| Error::PhoneFormat {
                value: raw.to_string(),
                reason: "extension has no 4-digit code",
            })?;
        formatted.push(' ');
        formatted.push_str(EXTENSION_MARKER);
        formatted.push_str(&code[1]);
    }

    Ok(formatted)
}
