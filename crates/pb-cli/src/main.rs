//! Contact List Cleaner CLI
//!
//! Command-line tool for normalizing contact CSV files: name fields are
//! redistributed, phone numbers canonicalized, and duplicate records merged.

use clap::{Parser, Subcommand};
use pb_core::{
    clean_table, find_contact_files, normalize_row, parse_csv, CleanReport, HeaderIndex, Table,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pb-cli")]
#[command(about = "Contact list cleaner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a contact file and write the result
    Clean {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Preview a cleaned table without writing it
    Show {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum number of rows to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Columns to display (comma-separated)
        #[arg(short, long)]
        columns: Option<String>,
    },

    /// List rows that would fail cleaning
    Check {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Clean every CSV file found under the given directories
    Batch {
        /// Root directories to scan
        #[arg(short, long, required = true)]
        root: Vec<PathBuf>,

        /// Directory for cleaned files
        #[arg(short, long)]
        output_dir: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> pb_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            format,
            report,
        } => cmd_clean(&input, &output, &format, report.as_deref()),
        Commands::Show {
            input,
            limit,
            columns,
        } => cmd_show(&input, limit, columns),
        Commands::Check { input } => cmd_check(&input),
        Commands::Batch { root, output_dir } => cmd_batch(&root, &output_dir),
    }
}

fn cmd_clean(
    input: &Path,
    output: &Path,
    format: &str,
    report_path: Option<&Path>,
) -> pb_core::Result<()> {
    let table = parse_csv(input)?;
    let (cleaned, stats) = clean_table(&table)?;

    match format.to_lowercase().as_str() {
        "csv" => write_csv(&cleaned, output)?,
        "json" => {
            let file = File::create(output)?;
            let mut writer = BufWriter::new(file);
            let json = serde_json::to_string_pretty(&cleaned)?;
            writeln!(writer, "{}", json)?;
        }
        _ => {
            eprintln!("Unknown format: {}. Supported formats: csv, json", format);
            std::process::exit(1);
        }
    }

    println!(
        "Cleaned {}: {} rows in, {} rows out ({} merged)",
        input.display(),
        stats.rows_read,
        stats.rows_written,
        stats.duplicates_merged
    );

    if let Some(path) = report_path {
        let report = CleanReport::new(input.to_path_buf(), output.to_path_buf(), &stats);
        report.save(path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn cmd_show(input: &Path, limit: Option<usize>, columns: Option<String>) -> pb_core::Result<()> {
    let table = parse_csv(input)?;
    let (cleaned, stats) = clean_table(&table)?;

    let index = HeaderIndex::new(&cleaned.header)?;

    // Resolve the column filter against the header mapping
    let display_cols: Vec<usize> = match columns {
        Some(ref filter) => {
            let mut positions = Vec::new();
            for name in filter.split(',') {
                positions.push(index.position(name.trim())?);
            }
            positions
        }
        None => (0..cleaned.header.len()).collect(),
    };

    let header: Vec<&str> = display_cols
        .iter()
        .map(|&i| cleaned.header[i].as_str())
        .collect();
    println!("{}", header.join("\t"));
    println!("{}", "-".repeat(header.len() * 12));

    let row_limit = limit.unwrap_or(cleaned.rows.len());
    for row in cleaned.rows.iter().take(row_limit) {
        let values: Vec<&str> = display_cols
            .iter()
            .map(|&i| row.get(i).map(String::as_str).unwrap_or_default())
            .collect();
        println!("{}", values.join("\t"));
    }

    if cleaned.rows.len() > row_limit {
        println!("... ({} more rows)", cleaned.rows.len() - row_limit);
    }

    println!();
    println!(
        "{} rows ({} merged from {})",
        stats.rows_written, stats.duplicates_merged, stats.rows_read
    );

    Ok(())
}

fn cmd_check(input: &Path) -> pb_core::Result<()> {
    let table = parse_csv(input)?;
    let index = HeaderIndex::new(&table.header)?;

    let mut problems = 0;
    for (idx, row) in table.rows.iter().enumerate() {
        if let Err(e) = normalize_row(&index, row) {
            println!("data row {}: {}", idx + 1, e);
            problems += 1;
        }
    }

    if problems > 0 {
        println!();
        println!("{} of {} rows failed", problems, table.rows.len());
        std::process::exit(1);
    }

    println!("All {} rows are cleanable", table.rows.len());
    Ok(())
}

fn cmd_batch(roots: &[PathBuf], output_dir: &Path) -> pb_core::Result<()> {
    let files = find_contact_files(roots)?;
    println!("Found {} CSV file(s)", files.len());

    std::fs::create_dir_all(output_dir)?;

    let mut total_merged = 0;
    let mut cleaned_files = 0;
    let mut errors = Vec::new();

    for input in &files {
        let file_name = match input.file_name() {
            Some(name) => name,
            None => continue,
        };
        let output = output_dir.join(file_name);

        let result = parse_csv(input).and_then(|table| {
            let (cleaned, stats) = clean_table(&table)?;
            write_csv(&cleaned, &output)?;
            Ok(stats)
        });

        match result {
            Ok(stats) => {
                total_merged += stats.duplicates_merged;
                cleaned_files += 1;
                println!(
                    "  {} -> {} ({} rows, {} merged)",
                    input.display(),
                    output.display(),
                    stats.rows_written,
                    stats.duplicates_merged
                );
            }
            Err(e) => {
                errors.push((input.clone(), e.to_string()));
            }
        }
    }

    println!();
    println!("Batch complete:");
    println!("  {} file(s) cleaned", cleaned_files);
    println!("  {} duplicate row(s) merged", total_merged);

    if !errors.is_empty() {
        println!();
        println!("Errors ({}):", errors.len());
        for (path, err) in &errors {
            println!("  {}: {}", path.display(), err);
        }
    }

    Ok(())
}

/// Write a table as CSV
fn write_csv(table: &Table, output: &Path) -> pb_core::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    let header: Vec<String> = table.header.iter().map(|name| escape_csv(name)).collect();
    writeln!(writer, "{}", header.join(","))?;

    for row in &table.rows {
        let values: Vec<String> = row.iter().map(|value| escape_csv(value)).collect();
        writeln!(writer, "{}", values.join(","))?;
    }

    Ok(())
}

/// Escape a value for CSV output
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("with\nnewline"), "\"with\nnewline\"");
    }
}
