//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while interpreting identifiers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown operation: {0} (expected add, lookup or remove)")]
    UnknownOperation(String),
}

/// Errors that can occur while loading a benchmark table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing header row in {0}")]
    MissingHeader(PathBuf),

    #[error("{path}:{line}: row has no column {column}")]
    MissingColumn {
        path: PathBuf,
        line: u64,
        column: usize,
    },

    #[error("{path}:{line}: invalid size '{value}'")]
    InvalidSize {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("{path}:{line}: invalid measurement '{value}'")]
    InvalidValue {
        path: PathBuf,
        line: u64,
        value: String,
    },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to encode table: {0}")]
    Table(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid report header: {0}")]
    InvalidHeader(String),
}
