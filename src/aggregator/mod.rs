//! Aggregation of benchmark samples into ratio reports.
//!
//! This module transforms loaded sample sets into:
//! - Pairwise performance ratios (tree/list, list/map, tree/map)
//! - Combined per-operation report rows
//! - Summary statistics for logging

pub mod ratios;
pub mod report;

// Re-export main types and functions
pub use ratios::{calculate_ratios, RatioSet, RatioTable};
pub use report::{header_for, CombinedReport, ReportRow, ReportSummary, RATIO_LABELS};
