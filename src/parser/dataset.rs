//! Loader for space-delimited benchmark tables.
//!
//! Input layout (one file per structure):
//!
//! ```text
//! size add_time lookup_time remove_time
//! 10 1.0 2.0 3.0
//! 100 1.5 2.5 3.5
//! ```
//!
//! The first row is a header and is skipped. Runs of spaces count as a
//! single separator, so column-aligned files load the same as compact ones.

use super::schema::{Operation, SampleSet};
use crate::utils::config::{FIELD_DELIMITER, SIZE_COLUMN};
use crate::utils::error::LoadError;
use log::{debug, warn};
use std::fs::File;
use std::path::Path;

/// Load one operation's measurements from a benchmark table
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `path` - Benchmark table (e.g. `list.dat`)
/// * `operation` - Selects the measurement column
///
/// # Errors
/// * `LoadError::Io` - File missing or unreadable
/// * `LoadError::MissingHeader` - File has no header row
/// * `LoadError::MissingColumn` / `InvalidSize` / `InvalidValue` - Malformed row
pub fn load_samples(path: impl AsRef<Path>, operation: Operation) -> Result<SampleSet, LoadError> {
    load_column(path, operation.column())
}

/// Load `size -> value` pairs from an arbitrary value column
///
/// **Public** - also used to reload value columns of a combined report
pub fn load_column(path: impl AsRef<Path>, column: usize) -> Result<SampleSet, LoadError> {
    let path = path.as_ref();

    debug!("Loading column {} from: {}", column, path.display());

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(|source| table_error(path, source))?;
    // Any first line counts as the header, even a blank-looking one
    if headers.is_empty() {
        return Err(LoadError::MissingHeader(path.to_path_buf()));
    }

    let mut samples = SampleSet::new();

    for record in reader.records() {
        let record = record.map_err(|source| table_error(path, source))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }

        let (size, value) = parse_row(path, line, &fields, column)?;

        if let Some(previous) = samples.insert(size, value) {
            warn!(
                "{}:{}: size {} appears more than once, replacing {} with {}",
                path.display(),
                line,
                size,
                previous,
                value
            );
        }
    }

    debug!("Loaded {} samples from {}", samples.len(), path.display());

    Ok(samples)
}

/// Parse the size and the requested value out of one row
///
/// **Private** - internal helper for load_column
fn parse_row(path: &Path, line: u64, fields: &[&str], column: usize) -> Result<(i64, f64), LoadError> {
    let missing = || LoadError::MissingColumn {
        path: path.to_path_buf(),
        line,
        column,
    };

    let raw_size = fields.get(SIZE_COLUMN).ok_or_else(missing)?;
    let raw_value = fields.get(column).ok_or_else(missing)?;

    let size = raw_size.parse::<i64>().map_err(|_| LoadError::InvalidSize {
        path: path.to_path_buf(),
        line,
        value: raw_size.to_string(),
    })?;

    let value = raw_value.parse::<f64>().map_err(|_| LoadError::InvalidValue {
        path: path.to_path_buf(),
        line,
        value: raw_value.to_string(),
    })?;

    Ok((size, value))
}

fn table_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Table {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_selects_operation_column() {
        let file = table("size add lookup remove\n10 1.0 2.0 3.0\n20 4.0 5.0 6.0\n");

        let add = load_samples(file.path(), Operation::Add).unwrap();
        let lookup = load_samples(file.path(), Operation::Lookup).unwrap();
        let remove = load_samples(file.path(), Operation::Remove).unwrap();

        assert_eq!(add.get(10), Some(1.0));
        assert_eq!(lookup.get(10), Some(2.0));
        assert_eq!(remove.get(20), Some(6.0));
        assert_eq!(add.len(), 2);
    }

    #[test]
    fn test_load_aligned_columns() {
        let file = table("size   add  lookup  remove\n  10   1.0     2.0     3.0\n1000  10.5    20.5    30.5\n");

        let lookup = load_samples(file.path(), Operation::Lookup).unwrap();
        assert_eq!(lookup.get(10), Some(2.0));
        assert_eq!(lookup.get(1000), Some(20.5));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let file = table("size add lookup remove\n\n10 1.0 2.0 3.0\n\n");
        let add = load_samples(file.path(), Operation::Add).unwrap();
        assert_eq!(add.len(), 1);
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = table("size add lookup remove\n");
        let add = load_samples(file.path(), Operation::Add).unwrap();
        assert!(add.is_empty());
    }

    #[test]
    fn test_whitespace_header_skipped() {
        let file = table("   \n10 1.0 2.0 3.0\n");
        let add = load_samples(file.path(), Operation::Add).unwrap();
        assert_eq!(add.get(10), Some(1.0));
        assert_eq!(add.len(), 1);
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = table("");
        let result = load_samples(file.path(), Operation::Add);
        assert!(matches!(result, Err(LoadError::MissingHeader(_))));
    }

    #[test]
    fn test_duplicate_size_last_wins() {
        let file = table("size add lookup remove\n10 1.0 2.0 3.0\n10 9.0 9.0 9.0\n");
        let add = load_samples(file.path(), Operation::Add).unwrap();
        assert_eq!(add.get(10), Some(9.0));
    }

    #[test]
    fn test_short_row_rejected() {
        let file = table("size add lookup remove\n10 1.0\n");
        let result = load_samples(file.path(), Operation::Remove);
        assert!(matches!(
            result,
            Err(LoadError::MissingColumn { line: 2, column: 3, .. })
        ));
    }

    #[test]
    fn test_non_numeric_size_rejected() {
        let file = table("size add lookup remove\nten 1.0 2.0 3.0\n");
        let result = load_samples(file.path(), Operation::Add);
        assert!(matches!(result, Err(LoadError::InvalidSize { .. })));
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let file = table("size add lookup remove\n10 fast 2.0 3.0\n");
        let result = load_samples(file.path(), Operation::Add);
        assert!(matches!(result, Err(LoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_samples(dir.path().join("list.dat"), Operation::Add);
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
