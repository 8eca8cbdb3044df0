//! Combined report table writer.
//!
//! Writes a space-delimited table: a quoted header row followed by one
//! row per size, e.g.
//!
//! ```text
//! Size "List Add" "Tree Add" "Map Add" "Tree/List Ratio" "List/Map Ratio" "Tree/Map Ratio"
//! 10 1.0 2.0 0.0 2.0 0.0 0.0
//! ```

use crate::aggregator::report::{header_for, CombinedReport, ReportRow};
use crate::parser::schema::Operation;
use crate::utils::config::FIELD_DELIMITER;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a combined report, replacing any existing file
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::Table` - Row encoding error
pub fn write_report(report: &CombinedReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} report to: {}", report.operation, output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(output_path)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));

    writer.write_record(report.header())?;
    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Report written successfully ({} rows)", report.rows.len());

    Ok(())
}

/// Validate that output path is writable
///
/// **Public** - shared by writers and tests
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a combined report back from disk
///
/// **Public** - useful for validation and round-trip checks
///
/// The operation is recovered from the header labels.
pub fn read_report(input_path: impl AsRef<Path>) -> Result<CombinedReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let operation = operation_from_header(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: ReportRow = record.deserialize(None)?;
        rows.push(row);
    }

    debug!("Report loaded: {} rows for '{}'", rows.len(), operation);

    Ok(CombinedReport { operation, rows })
}

/// Match a header row against each operation's expected labels
///
/// **Private** - internal helper for read_report
fn operation_from_header(headers: &[String]) -> Result<Operation, OutputError> {
    Operation::ALL
        .into_iter()
        .find(|op| header_for(*op) == headers)
        .ok_or_else(|| OutputError::InvalidHeader(headers.join(", ")))
}
