//! Benchmark configuration.
//!
//! `BenchConfig` replaces process-wide constants with explicit state passed
//! into the driver and each strategy, so isolated runs (and tests) can target
//! distinct files with reproducible randomness.

use std::path::{Path, PathBuf};

use crate::{error::Error, strategy::mapped};

/// Default dataset file name.
pub const DEFAULT_FILENAME: &str = "tasks_data.bin";

/// Default record counts benchmarked per strategy.
pub const DEFAULT_COUNTS: [usize; 3] = [10_000, 50_000, 100_000];

/// Default number of records the initializer writes.
pub const DEFAULT_DATASET_RECORDS: usize = 100_000;

/// Largest record count the synthetic id rules can represent: the mapped
/// strategy offsets ids by [`mapped::ID_BASE`], which must stay within `i32`.
const MAX_COUNT: usize = i32::MAX as usize - mapped::ID_BASE;

/// Configuration for a benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    path: PathBuf,
    counts: Vec<usize>,
    dataset_records: usize,
    seed: Option<u64>,
}

impl Default for BenchConfig {
    /// Default configuration: the `tasks_data.bin` file in the working
    /// directory, a 100,000-record dataset, and counts of 10,000 /
    /// 50,000 / 100,000.
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME)
    }
}

impl BenchConfig {
    /// Creates a configuration for the given dataset path with default
    /// counts, dataset size, and per-run entropy seeding.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            counts: DEFAULT_COUNTS.to_vec(),
            dataset_records: DEFAULT_DATASET_RECORDS,
            seed: None,
        }
    }

    /// Sets the list of record counts to benchmark.
    pub fn with_counts(mut self, counts: Vec<usize>) -> Self {
        self.counts = counts;
        self
    }

    /// Sets the number of records the initializer writes.
    pub const fn with_dataset_records(mut self, dataset_records: usize) -> Self {
        self.dataset_records = dataset_records;
        self
    }

    /// Sets a fixed seed for synthetic fields and random read offsets,
    /// making a run reproducible.
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Gets the dataset file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the record counts to benchmark.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Gets the initializer record count.
    pub const fn dataset_records(&self) -> usize {
        self.dataset_records
    }

    /// Gets the configured seed, if any.
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Creates the random source for a run: seeded when configured,
    /// otherwise drawn from process entropy.
    pub fn rng(&self) -> fastrand::Rng {
        self.seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the counts list is empty, the dataset
    /// size is zero, or any count exceeds the representable id range.
    pub fn validate(&self) -> Result<(), Error> {
        if self.counts.is_empty() {
            return Err(Error::Config("record counts list is empty".to_string()));
        }
        if self.dataset_records == 0 {
            return Err(Error::Config("dataset record count is zero".to_string()));
        }
        if let Some(&count) = self
            .counts
            .iter()
            .chain([&self.dataset_records])
            .find(|&&count| count > MAX_COUNT)
        {
            return Err(Error::Config(format!(
                "record count {count} exceeds the supported maximum of {MAX_COUNT}"
            )));
        }

        Ok(())
    }
}
