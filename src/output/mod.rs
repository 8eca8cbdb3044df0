//! Output writers for combined reports.
//!
//! This module handles writing report tables to disk and reading
//! them back for validation.

pub mod table;

// Re-export main functions
pub use table::{read_report, validate_path, write_report};
