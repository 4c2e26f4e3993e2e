//! Positioned I/O: a seek followed by one record-sized transfer per access.
//!
//! The write phase measures many small sequential writes; the read phase
//! measures random record-aligned reads through the same seek-then-transfer
//! primitive.

use std::{
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
    time::Instant,
};

use crate::{
    error::Error,
    record::{RECORD_SIZE, TaskRecord},
    strategy::{PhaseReport, open_read, open_read_write, random_record_offsets},
};

/// Writes `count` replacement records, one positioned write each, then syncs.
pub(crate) fn write(path: &Path, count: usize) -> Result<PhaseReport, Error> {
    let start = Instant::now();

    let mut file = open_read_write(path)?;
    for i in 0..count {
        let record = TaskRecord::new(
            i as i32,
            &format!("positioned write test {i}"),
            i % 2 == 0,
            100 + i as i32,
        );

        file.seek(SeekFrom::Start((i * RECORD_SIZE) as u64))
            .map_err(|source| Error::io(path, "failed to seek to record offset", source))?;
        file.write_all(&record.encode())
            .map_err(|source| Error::io(path, "failed to write record", source))?;
    }
    file.sync_all()
        .map_err(|source| Error::io(path, "failed to sync file", source))?;

    Ok(PhaseReport {
        elapsed: start.elapsed(),
        records: count,
    })
}

/// Reads `count` records at random record-aligned offsets, decoding and
/// discarding each.
pub(crate) fn read(path: &Path, count: usize, rng: &mut fastrand::Rng) -> Result<PhaseReport, Error> {
    let mut file = open_read(path)?;
    let file_len = file
        .metadata()
        .map_err(|source| Error::io(path, "failed to read file metadata", source))?
        .len();
    let offsets = random_record_offsets(rng, file_len, count)?;

    let mut buf = [0u8; RECORD_SIZE];
    let start = Instant::now();

    for offset in offsets {
        file.seek(SeekFrom::Start(offset))
            .map_err(|source| Error::io(path, "failed to seek to record offset", source))?;
        file.read_exact(&mut buf)
            .map_err(|source| Error::io(path, "failed to read record", source))?;
        let _record = TaskRecord::decode(&buf)?;
    }

    Ok(PhaseReport {
        elapsed: start.elapsed(),
        records: count,
    })
}
