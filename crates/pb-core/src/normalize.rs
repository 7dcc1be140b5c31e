//! Per-row normalization
//!
//! Each data row is rewritten independently: extra fields beyond the
//! recognized columns are dropped, name tokens are redistributed, and a
//! non-empty phone field is replaced with its canonical form.

use crate::error::{Error, Result};
use crate::header::HeaderIndex;
use crate::name::reassign_names;
use crate::phone::normalize_phone;

/// Normalize one raw data row against the header mapping.
///
/// Pure per row; safe to run over all rows in any order.
pub fn normalize_row(header: &HeaderIndex, raw: &[String]) -> Result<Vec<String>> {
    let mut row: Vec<String> = raw.iter().take(header.len()).cloned().collect();

    reassign_names(header, raw, &mut row)?;

    let position = header.phone();
    let phone = row.get(position).ok_or(Error::ShortRow {
        position,
        len: row.len(),
    })?;
    if !phone.is_empty() {
        let formatted = normalize_phone(phone)?;
        row[position] = formatted;
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    fn index() -> HeaderIndex {
        HeaderIndex::new(&strings(&["lastname", "firstname", "surname", "phone"])).unwrap()
    }

    #[test]
    fn test_names_and_phone_rewritten() {
        let header = index();
        let row = normalize_row(
            &header,
            &strings(&["Иванов Иван Иванович", "", "", "8 (495) 123-45-67"]),
        )
        .unwrap();
        assert_eq!(
            row,
            strings(&["Иванов", "Иван", "Иванович", "+7(495)123-45-67"])
        );
    }

    #[test]
    fn test_long_row_truncated() {
        let header = index();
        let row = normalize_row(
            &header,
            &strings(&["Петров", "Петр", "Петрович", "4951234567", "extra"]),
        )
        .unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[3], "+7(495)123-45-67");
    }

    #[test]
    fn test_empty_phone_left_alone() {
        let header = index();
        let row = normalize_row(&header, &strings(&["Петров", "Петр", "", ""])).unwrap();
        assert_eq!(row[3], "");
    }

    #[test]
    fn test_bad_phone_propagates() {
        let header = index();
        let err = normalize_row(&header, &strings(&["Петров", "", "", "none"])).unwrap_err();
        assert!(matches!(err, Error::PhoneFormat { .. }));
    }

    #[test]
    fn test_short_row_fails() {
        let header = index();
        let err = normalize_row(&header, &strings(&["Петров"])).unwrap_err();
        assert!(matches!(err, Error::ShortRow { .. }));
    }

    #[test]
    fn test_passthrough_columns_untouched() {
        let header = HeaderIndex::new(&strings(&[
            "lastname",
            "firstname",
            "surname",
            "email",
            "phone",
        ]))
        .unwrap();
        let row = normalize_row(
            &header,
            &strings(&["Сидоров", "Анна", "", "anna@example.com", ""]),
        )
        .unwrap();
        assert_eq!(row[3], "anna@example.com");
    }
}
