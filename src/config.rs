use std::path::PathBuf;

use clap::Parser;

use crate::benchmark::DEFAULT_REPETITIONS;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Scenario corpus file; the built-in corpus is used when omitted
    #[arg(long)]
    pub scenario_file: Option<PathBuf>,

    /// Benchmark repetitions per (algorithm, scenario) pair
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// Write the benchmark results as CSV to this file
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Append this many randomly generated lots to the corpus
    #[arg(long, default_value_t = 0)]
    pub random_scenarios: usize,

    /// Edge length of generated random lots
    #[arg(long, default_value_t = 20)]
    pub grid_size: usize,

    /// Fraction of occupied cells in generated random lots
    #[arg(long, default_value_t = 0.35)]
    pub occupancy: f64,

    /// Seed for random lot generation
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Trace the route to the nearest free spot instead of benchmarking
    #[arg(long, default_value_t = false)]
    pub route: bool,

    /// Scenario to trace in route mode (defaults to the first in the corpus)
    #[arg(long)]
    pub scenario: Option<String>,

    /// Origin row override for route mode
    #[arg(long)]
    pub origin_row: Option<usize>,

    /// Origin column override for route mode
    #[arg(long)]
    pub origin_col: Option<usize>,

    /// Minimal output
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
