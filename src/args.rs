use std::path::PathBuf;

use clap::Parser;
use record_bench::{
    BenchConfig,
    config::{DEFAULT_COUNTS, DEFAULT_DATASET_RECORDS, DEFAULT_FILENAME},
};

#[derive(Debug, Parser)]
#[command(about, version)]
pub(crate) struct Args {
    /// Dataset file path; generated on first run when absent.
    #[arg(default_value = DEFAULT_FILENAME, value_name = "PATH")]
    pub(crate) path: PathBuf,

    /// Record counts to benchmark, comma-delimited.
    #[arg(short, long, use_value_delimiter = true, default_values_t = DEFAULT_COUNTS, value_name = "COUNTS")]
    pub(crate) counts: Vec<usize>,

    /// Records the generator writes when creating the dataset.
    #[arg(short = 'n', long, default_value_t = DEFAULT_DATASET_RECORDS, value_name = "COUNT")]
    pub(crate) dataset_records: usize,

    /// Seed for synthetic fields and random read offsets.
    #[arg(short, long, value_name = "SEED")]
    pub(crate) seed: Option<u64>,

    /// Write the timing report to a file rather than stdout.
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Print configuration details to stderr before the run.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
}

impl Args {
    /// Builds the run configuration from parsed arguments.
    pub(crate) fn to_config(&self) -> BenchConfig {
        let config = BenchConfig::new(&self.path)
            .with_counts(self.counts.clone())
            .with_dataset_records(self.dataset_records);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
