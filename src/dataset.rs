//! One-shot generator for the benchmark dataset file.

use std::{
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    path::Path,
    time::{Duration, Instant},
};

use crate::{config::BenchConfig, error::Error, record::TaskRecord};

/// Generates the dataset file: sequential ids `1..=N`, random completion
/// flags, random amounts in `[10, 999]`, and an index-bearing description,
/// each encoded through the codec and written sequentially.
///
/// The file is created fresh and synced to stable storage before returning.
/// Returns the elapsed generation time.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file already exists, cannot be created, or
/// any write or sync fails. The driver only invokes the generator when the
/// file is absent.
pub fn generate(config: &BenchConfig, rng: &mut fastrand::Rng) -> Result<Duration, Error> {
    let path = config.path();
    let start = Instant::now();

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| create_error(path, source))?;
    let mut writer = BufWriter::new(file);

    for id in 1..=config.dataset_records() {
        let record = TaskRecord::new(
            id as i32,
            &format!("Task Description #{id} with some random text."),
            rng.bool(),
            rng.i32(10..=999),
        );
        writer
            .write_all(&record.encode())
            .map_err(|source| Error::io(path, "failed to write record", source))?;
    }

    let file = writer
        .into_inner()
        .map_err(|source| Error::io(path, "failed to flush record buffer", source.into_error()))?;
    file.sync_all()
        .map_err(|source| Error::io(path, "failed to sync file", source))?;

    Ok(start.elapsed())
}

fn create_error(path: &Path, source: io::Error) -> Error {
    let message = match source.kind() {
        io::ErrorKind::AlreadyExists => "dataset file already exists",
        io::ErrorKind::PermissionDenied => "permission denied",
        _ => "failed to create dataset file",
    };
    Error::io(path, message, source)
}
