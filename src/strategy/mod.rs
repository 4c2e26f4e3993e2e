//! File access strategies under benchmark.
//!
//! Three strategies exercise the same record codec through different I/O
//! primitives:
//!
//! - [`Strategy::Positioned`]: one seek and one record-sized transfer per
//!   access.
//! - [`Strategy::Buffered`]: one bulk write of an in-memory buffer, then
//!   record-at-a-time sequential reads.
//! - [`Strategy::MemoryMapped`]: records copied directly through a mapped
//!   region.
//!
//! All strategies route every record through [`TaskRecord`]'s encode and
//! decode, so each one writes the full 128-byte layout including the
//! description field's padding. Random record indices for the read phases
//! are drawn before the timed region starts, keeping RNG cost out of the
//! measured I/O latency.

pub mod buffered;
pub mod mapped;
pub mod positioned;

use std::{
    fmt::{self, Display, Formatter},
    fs::{File, OpenOptions},
    io,
    path::Path,
    time::Duration,
};

use crate::{config::BenchConfig, error::Error, record::RECORD_SIZE};

/// Outcome of one timed benchmark phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseReport {
    /// Wall-clock time the phase took.
    pub elapsed: Duration,
    /// Number of records the phase actually processed. Equal to the
    /// requested count except when the mapped write phase stops at the end
    /// of the mapping.
    pub records: usize,
}

/// A file access strategy with a timed write phase and read phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Seek to a record offset, then transfer one record.
    Positioned,
    /// Bulk write of one large buffer; sequential record reads.
    Buffered,
    /// Records copied through a memory mapping.
    MemoryMapped,
}

impl Strategy {
    /// All strategies in the fixed order the driver runs them.
    pub const ALL: [Self; 3] = [Self::Positioned, Self::Buffered, Self::MemoryMapped];

    /// Runs the strategy's write phase: `count` synthetic replacement
    /// records written over the file's first `count` slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, written, or
    /// synced.
    pub fn write_phase(self, config: &BenchConfig, count: usize) -> Result<PhaseReport, Error> {
        match self {
            Self::Positioned => positioned::write(config.path(), count),
            Self::Buffered => buffered::write(config.path(), count),
            Self::MemoryMapped => mapped::write(config.path(), count),
        }
    }

    /// Runs the strategy's read phase: `count` records read back and
    /// decoded, results discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on any read failure and [`Error::Config`] if
    /// the file holds no complete records to draw offsets from.
    pub fn read_phase(
        self,
        config: &BenchConfig,
        count: usize,
        rng: &mut fastrand::Rng,
    ) -> Result<PhaseReport, Error> {
        match self {
            Self::Positioned => positioned::read(config.path(), count, rng),
            Self::Buffered => buffered::read(config.path(), count),
            Self::MemoryMapped => mapped::read(config.path(), count, rng),
        }
    }

    /// Human-readable label for the write phase.
    pub const fn write_label(self) -> &'static str {
        match self {
            Self::Positioned => "positioned write",
            Self::Buffered => "buffered bulk write",
            Self::MemoryMapped => "mapped write",
        }
    }

    /// Human-readable label for the read phase.
    pub const fn read_label(self) -> &'static str {
        match self {
            Self::Positioned => "positioned random read",
            Self::Buffered => "buffered sequential read",
            Self::MemoryMapped => "mapped random read",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positioned => write!(f, "positioned"),
            Self::Buffered => write!(f, "buffered"),
            Self::MemoryMapped => write!(f, "memory-mapped"),
        }
    }
}

/// Opens the benchmark file read-only with error context.
pub(crate) fn open_read(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|source| open_error(path, source))
}

/// Opens the benchmark file for in-place reads and writes, never truncating:
/// records beyond the written range must survive a write phase.
pub(crate) fn open_read_write(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|source| open_error(path, source))
}

fn open_error(path: &Path, source: io::Error) -> Error {
    let message = match source.kind() {
        io::ErrorKind::NotFound => "no such file",
        io::ErrorKind::PermissionDenied => "permission denied",
        _ => "failed to open file",
    };
    Error::io(path, message, source)
}

/// Draws `count` record-aligned byte offsets uniformly from the complete
/// records in a file of `file_len` bytes. Called before a read phase's
/// timer starts.
pub(crate) fn random_record_offsets(
    rng: &mut fastrand::Rng,
    file_len: u64,
    count: usize,
) -> Result<Vec<u64>, Error> {
    let records = usize::try_from(file_len / RECORD_SIZE as u64)
        .map_err(|_| Error::Config(format!("file length {file_len} exceeds addressable range")))?;
    if records == 0 {
        return Err(Error::Config(
            "file holds no complete records to read".to_string(),
        ));
    }

    Ok((0..count)
        .map(|_| (rng.usize(..records) * RECORD_SIZE) as u64)
        .collect())
}
