//! Benchmark harness comparing strategies for persisting and retrieving
//! fixed-size binary records in a flat file.
//!
//! `record-bench` measures the latency of three access strategies over the
//! same 128-byte record format: positioned read/write calls (one seek and
//! one transfer per record), bulk buffered I/O (one large write, sequential
//! record reads), and memory-mapped access (records copied through a mapped
//! region). Each strategy runs a timed write phase and read phase across a
//! configurable list of record counts.
//!
//! This is a measurement harness, not a database: there is no durability
//! guarantee beyond the explicit per-phase syncs, no concurrent access, and
//! no indexing. The dataset file is the sole persisted artifact — a
//! headerless flat sequence of 128-byte records whose length divided by 128
//! is the record count.
//!
//! ## Module structure
//!
//! - `bench.rs`: benchmark driver and report formatting
//! - `config.rs`: run configuration in place of process-wide constants
//! - `dataset.rs`: one-shot dataset file generator
//! - `error.rs`: structured error types
//! - `exit_code.rs`: Unix sysexits exit code mapping
//! - `output.rs`: report and diagnostic writers
//! - `record.rs`: fixed-size record codec
//! - `strategy/`: the three access strategies
//!   - `strategy/positioned.rs`: seek-then-transfer accesses
//!   - `strategy/buffered.rs`: bulk buffer write, sequential reads
//!   - `strategy/mapped.rs`: memory-mapped accesses
//!
//! # Examples
//!
//! ```
//! use record_bench::{BenchConfig, Benchmark, Output};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BenchConfig::new("tasks_data.bin")
//!     .with_counts(vec![1_000, 5_000])
//!     .with_seed(42);
//!
//! let benchmark = Benchmark::new(config)?;
//! benchmark.run(&mut Output::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod bench;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exit_code;
pub mod output;
pub mod record;
pub mod strategy;

pub use bench::Benchmark;
pub use config::BenchConfig;
pub use error::Error;
pub use exit_code::ExitCode;
pub use output::Output;
pub use record::{MAX_DESCRIPTION_CHARS, RECORD_SIZE, TaskRecord};
pub use strategy::{PhaseReport, Strategy};
