//! Aggregate command implementation.
//!
//! For each operation the aggregate command:
//! 1. Loads the list, tree and map tables
//! 2. Calculates tree/list, list/map and tree/map ratios
//! 3. Writes `combined_<operation>_ratios.dat`

use crate::aggregator::{CombinedReport, RatioTable};
use crate::output::write_report;
use crate::parser::{load_samples, Operation, Structure, StructureSamples};
use crate::utils::config::output_file_name;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Directory holding list.dat, tree.dat and map.dat
    pub input_dir: PathBuf,

    /// Directory receiving the combined reports
    pub output_dir: PathBuf,

    /// Operations to report, in order
    pub operations: Vec<Operation>,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            operations: Operation::ALL.to_vec(),
        }
    }
}

impl AggregateArgs {
    /// Read from and write to the same directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            input_dir: dir.clone(),
            output_dir: dir,
            ..Self::default()
        }
    }
}

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// Operations run one after another. The first failure aborts the
/// whole batch; reports already written are left in place.
///
/// # Returns
/// Paths of the written reports, in operation order
pub fn execute_aggregate(args: AggregateArgs) -> Result<Vec<PathBuf>> {
    let start_time = Instant::now();

    info!("Aggregating benchmark results in: {}", args.input_dir.display());

    let mut written = Vec::with_capacity(args.operations.len());
    for (i, operation) in args.operations.iter().enumerate() {
        info!("Operation {}/{}: {}", i + 1, args.operations.len(), operation);
        let path = run_operation(&args, *operation)
            .with_context(|| format!("Failed to build {} report", operation))?;
        written.push(path);
    }

    let elapsed = start_time.elapsed();
    info!(
        "Wrote {} reports in {:.2}s",
        written.len(),
        elapsed.as_secs_f64()
    );

    Ok(written)
}

/// Run the load, ratio and write pipeline for one operation
///
/// **Public** - one self-contained pipeline; shares no state with other operations
pub fn run_operation(args: &AggregateArgs, operation: Operation) -> Result<PathBuf> {
    let samples = load_structures(&args.input_dir, operation)?;

    debug!(
        "Loaded samples: list={} tree={} map={}",
        samples.list.len(),
        samples.tree.len(),
        samples.map.len()
    );

    let ratios = RatioTable::from_samples(&samples.list, &samples.tree, &samples.map);
    let report = CombinedReport::assemble(operation, &samples, &ratios);

    info!("{}", report.summary(&ratios).summary());

    let output_path = args.output_dir.join(output_file_name(operation));
    write_report(&report, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("✓ Report written to: {}", output_path.display());

    Ok(output_path)
}

/// Load all three structures' samples for an operation
///
/// **Private** - internal helper for run_operation
fn load_structures(dir: &Path, operation: Operation) -> Result<StructureSamples> {
    let load = |structure: Structure| {
        let path = dir.join(structure.input_file());
        load_samples(&path, operation)
            .with_context(|| format!("Failed to load {} samples", structure.label()))
    };

    Ok(StructureSamples {
        list: load(Structure::List)?,
        tree: load(Structure::Tree)?,
        map: load(Structure::Map)?,
    })
}
