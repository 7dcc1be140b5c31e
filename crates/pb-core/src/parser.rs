//! CSV parser for contact list files

use crate::error::{Error, Result};
use crate::table::Table;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a CSV file into a Table
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Allow varying number of fields
        .from_reader(BufReader::new(file));
    read_table(reader, path)
}

/// Parse CSV from a string (useful for testing)
pub fn parse_csv_str(content: &str, source_name: &str) -> Result<Table> {
    let path = Path::new(source_name);
    read_table(
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes()),
        path,
    )
}

fn read_table<R: std::io::Read>(mut csv_reader: csv::Reader<R>, path: &Path) -> Result<Table> {
    let headers = csv_reader.headers().map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    let header: Vec<String> = headers.iter().map(str::to_string).collect();

    if header.is_empty() {
        return Err(Error::CsvParse {
            path: path.to_path_buf(),
            message: "no columns found in CSV".to_string(),
        });
    }

    // Rows are kept verbatim: no padding of short rows and no truncation of
    // long ones. Normalization owns row sizing.
    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table {
        header,
        rows,
        source_path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let csv = "lastname,firstname,surname,phone\nIvanov,Ivan,,4951234567\nPetrov,Petr,,\n";
        let table = parse_csv_str(csv, "test.csv").unwrap();

        assert_eq!(
            table.header,
            vec!["lastname", "firstname", "surname", "phone"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Ivanov");
        assert_eq!(table.rows[0][3], "4951234567");
    }

    #[test]
    fn test_parse_preserves_empty_fields() {
        let csv = "lastname,firstname,surname,phone\n,Ivan,,\n";
        let table = parse_csv_str(csv, "test.csv").unwrap();
        assert_eq!(table.rows[0], vec!["", "Ivan", "", ""]);
    }

    #[test]
    fn test_short_rows_are_not_padded() {
        let csv = "lastname,firstname,surname,phone\nIvanov,Ivan\n";
        let table = parse_csv_str(csv, "test.csv").unwrap();
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn test_long_rows_are_not_truncated() {
        let csv = "lastname,firstname,surname,phone\nIvanov,Ivan,,,extra\n";
        let table = parse_csv_str(csv, "test.csv").unwrap();
        assert_eq!(table.rows[0].len(), 5);
        assert_eq!(table.rows[0][4], "extra");
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let csv = "lastname,firstname,surname,phone\n Ivanov ,Ivan,,\n";
        let table = parse_csv_str(csv, "test.csv").unwrap();
        assert_eq!(table.rows[0][0], " Ivanov ");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_csv("no/such/file.csv").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
