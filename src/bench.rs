//! Benchmark orchestration and reporting.

use std::{fs, time::Duration};

use anyhow::Result;

use crate::{
    config::BenchConfig,
    dataset,
    error::Error,
    output::Output,
    record::RECORD_SIZE,
    strategy::{PhaseReport, Strategy},
};

/// Orchestrates a benchmark run: dataset creation when needed, then every
/// strategy's write and read phases across the configured record counts.
#[derive(Clone, Debug)]
pub struct Benchmark {
    config: BenchConfig,
}

impl Benchmark {
    /// Creates a benchmark from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn new(config: BenchConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Gets the run configuration.
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs the full benchmark, writing one human-readable timing line per
    /// phase.
    ///
    /// Phases execute strictly sequentially: for each configured count, the
    /// positioned, buffered, and memory-mapped strategies run their write
    /// then read phases in that fixed order. Any I/O failure aborts the
    /// remainder of the run.
    ///
    /// # Errors
    ///
    /// Returns an error on any I/O failure, with no retries and no
    /// partial-result reporting.
    pub fn run(&self, output: &mut Output) -> Result<()> {
        let path = self.config.path();
        let mut rng = self.config.rng();

        if !path.exists() {
            let elapsed = dataset::generate(&self.config, &mut rng)?;
            output.write_line(&format!(
                "generated {} records in {}: {} ms\n",
                self.config.dataset_records(),
                path.display(),
                millis(elapsed),
            ))?;
        }

        let file_len = fs::metadata(path)
            .map_err(|source| Error::io(path, "failed to read file metadata", source))?
            .len();
        let records = file_len / RECORD_SIZE as u64;
        self.check_counts(records)?;

        output.write_line(&format!(
            "file size: {file_len} bytes ({records} records)\n"
        ))?;

        for &count in self.config.counts() {
            output.write_line(&format!("\n=== {count} records ===\n"))?;

            for strategy in Strategy::ALL {
                let write = strategy.write_phase(&self.config, count)?;
                output.write_line(&report_line(strategy.write_label(), &write))?;

                let read = strategy.read_phase(&self.config, count, &mut rng)?;
                output.write_line(&report_line(strategy.read_label(), &read))?;
            }
        }

        output.flush()
    }

    /// Every configured count must fit within the records on disk, so read
    /// phases never run off the end of the file mid-measurement.
    fn check_counts(&self, records: u64) -> Result<(), Error> {
        match self.config.counts().iter().find(|&&c| c as u64 > records) {
            Some(count) => Err(Error::Config(format!(
                "count {count} exceeds the {records} records in {}",
                self.config.path().display()
            ))),
            None => Ok(()),
        }
    }
}

/// Formats one phase's timing line.
fn report_line(label: &str, report: &PhaseReport) -> String {
    format!(
        "{label} ({} records): {} ms\n",
        report.records,
        millis(report.elapsed)
    )
}

/// Milliseconds with microsecond precision, formatted to three decimals.
fn millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1_000.0)
}
