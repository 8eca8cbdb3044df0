//! Bench Ratios CLI
//!
//! Reads list.dat, tree.dat and map.dat from a directory and writes one
//! combined ratio report per operation next to them.

use anyhow::Result;
use bench_ratios::commands::{execute_aggregate, AggregateArgs};
use bench_ratios::parser::parse_operations;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

/// Bench Ratios - compare list, tree and map benchmark results
#[derive(Parser, Debug)]
#[command(name = "bench-ratios")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the benchmark tables and receiving the reports
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Operation to report (add, lookup, remove); repeatable, defaults to all
    #[arg(short, long = "operation", value_name = "OP")]
    operations: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AggregateArgs {
        operations: parse_operations(&cli.operations)?,
        ..AggregateArgs::in_dir(cli.dir)
    };
    execute_aggregate(args)?;

    Ok(())
}
