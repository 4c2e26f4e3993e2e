//! Verbose diagnostics for benchmark runs.

use anyhow::Result;
use record_bench::{BenchConfig, Output, RECORD_SIZE};

/// Writes run configuration details as key-value lines on stderr.
#[derive(Debug)]
pub(crate) struct Verbose {
    output: Output,
}

impl Default for Verbose {
    /// Default verbose logger writes to stderr.
    fn default() -> Self {
        Self {
            output: Output::stderr(),
        }
    }
}

impl Verbose {
    /// Writes one `key value` line per configuration field.
    pub(crate) fn log(&mut self, config: &BenchConfig) -> Result<()> {
        let counts = config
            .counts()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let pairs = [
            ("source", config.path().display().to_string()),
            ("record-size", RECORD_SIZE.to_string()),
            ("counts", counts),
            ("dataset-records", config.dataset_records().to_string()),
            (
                "seed",
                config.seed().map_or("none".to_string(), |s| s.to_string()),
            ),
        ];

        for (field, value) in pairs {
            self.output.write_line(&format!("{field} {value}\n"))?;
        }

        self.output.flush()
    }
}
