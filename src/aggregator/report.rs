//! Combine the three structures' samples and ratios into one report.
//!
//! One row per size found in any of the three sample sets, in ascending
//! size order. Values a structure did not measure read as `0.0`.

use super::ratios::{RatioSet, RatioTable};
use crate::parser::schema::{Operation, Structure, StructureSamples};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Labels of the three ratio columns
pub const RATIO_LABELS: [&str; 3] = ["Tree/List Ratio", "List/Map Ratio", "Tree/Map Ratio"];

/// One line of a combined report
///
/// Field order is the column order on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub size: i64,
    pub list: f64,
    pub tree: f64,
    pub map: f64,
    pub tree_list: f64,
    pub list_map: f64,
    pub tree_map: f64,
}

/// Combined report for a single operation
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedReport {
    pub operation: Operation,
    pub rows: Vec<ReportRow>,
}

impl CombinedReport {
    /// Build the report rows from loaded samples and their ratios
    ///
    /// **Public** - main entry point for report assembly
    pub fn assemble(operation: Operation, samples: &StructureSamples, ratios: &RatioTable) -> Self {
        let sizes: BTreeSet<i64> = Structure::ALL
            .iter()
            .flat_map(|s| samples.get(*s).sizes())
            .collect();

        let rows: Vec<ReportRow> = sizes
            .into_iter()
            .map(|size| ReportRow {
                size,
                list: samples.list.get(size).unwrap_or(0.0),
                tree: samples.tree.get(size).unwrap_or(0.0),
                map: samples.map.get(size).unwrap_or(0.0),
                tree_list: ratios.tree_list.get(size),
                list_map: ratios.list_map.get(size),
                tree_map: ratios.tree_map.get(size),
            })
            .collect();

        debug!("Assembled {} report rows for '{}'", rows.len(), operation);

        Self { operation, rows }
    }

    /// Column labels, e.g. `Size`, `List Add`, ..., `Tree/Map Ratio`
    pub fn header(&self) -> Vec<String> {
        header_for(self.operation)
    }

    /// Summarize this report together with the ratios it was built from
    pub fn summary(&self, ratios: &RatioTable) -> ReportSummary {
        ReportSummary::new(self.operation, &self.rows, ratios)
    }
}

/// Report header for an operation
pub fn header_for(operation: Operation) -> Vec<String> {
    let mut header = Vec::with_capacity(7);
    header.push("Size".to_string());
    for structure in Structure::ALL {
        header.push(format!("{} {}", structure.label(), operation.title()));
    }
    header.extend(RATIO_LABELS.iter().map(|label| label.to_string()));
    header
}

/// Aggregate statistics over a combined report
///
/// Counts and means cover defined ratios only. An undefined ratio is
/// written as `0.0` but never counted; a computed `0.0` quotient is.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub operation: Operation,
    pub row_count: usize,
    pub min_size: Option<i64>,
    pub max_size: Option<i64>,
    pub defined_tree_list: usize,
    pub defined_list_map: usize,
    pub defined_tree_map: usize,
    pub mean_tree_list: Option<f64>,
    pub mean_list_map: Option<f64>,
    pub mean_tree_map: Option<f64>,
}

impl ReportSummary {
    fn new(operation: Operation, rows: &[ReportRow], ratios: &RatioTable) -> Self {
        Self {
            operation,
            row_count: rows.len(),
            min_size: rows.first().map(|r| r.size),
            max_size: rows.last().map(|r| r.size),
            defined_tree_list: ratios.tree_list.defined_count(),
            defined_list_map: ratios.list_map.defined_count(),
            defined_tree_map: ratios.tree_map.defined_count(),
            mean_tree_list: defined_mean(&ratios.tree_list),
            mean_list_map: defined_mean(&ratios.list_map),
            mean_tree_map: defined_mean(&ratios.tree_map),
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging
    pub fn summary(&self) -> String {
        let range = match (self.min_size, self.max_size) {
            (Some(min), Some(max)) => format!("{}..={}", min, max),
            _ => "none".to_string(),
        };
        format!(
            "{} | Rows: {} | Sizes: {} | Tree/List: {} defined, mean {} | List/Map: {} defined, mean {} | Tree/Map: {} defined, mean {}",
            self.operation.title(),
            self.row_count,
            range,
            self.defined_tree_list,
            fmt_mean(self.mean_tree_list),
            self.defined_list_map,
            fmt_mean(self.mean_list_map),
            self.defined_tree_map,
            fmt_mean(self.mean_tree_map)
        )
    }
}

fn defined_mean(ratios: &RatioSet) -> Option<f64> {
    let (sum, count) = ratios
        .iter()
        .filter_map(|(_, ratio)| ratio)
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn fmt_mean(mean: Option<f64>) -> String {
    mean.map(|m| format!("{:.3}", m)).unwrap_or_else(|| "n/a".to_string())
}
