//! Bench Ratios
//!
//! Combines list, tree and map benchmark results into per-operation
//! ratio reports.
//!
//! Each structure's measurements live in a space-delimited table
//! (`list.dat`, `tree.dat`, `map.dat`) with one column per operation.
//! For every operation (add, lookup, remove) the crate computes the
//! tree/list, list/map and tree/map ratios and writes
//! `combined_<operation>_ratios.dat`.
//!
//! ```bash
//! cd results/
//! bench-ratios
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
