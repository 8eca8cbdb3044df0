//! Benchmark table parsing and core data types.
//!
//! This module handles:
//! - Operation and structure identifiers
//! - Loading size-indexed measurements from benchmark tables

pub mod dataset;
pub mod schema;

// Re-export main types
pub use dataset::{load_column, load_samples};
pub use schema::{parse_operations, Operation, SampleSet, Structure, StructureSamples};
