//! Buffered I/O: one bulk write of an in-memory buffer, sequential reads.
//!
//! The write phase measures the throughput of a single large write against
//! the positioned strategy's many small ones; the read phase measures
//! record-at-a-time sequential reads from the start of the file.

use std::{
    io::{Read, Write},
    path::Path,
    time::Instant,
};

use crate::{
    error::Error,
    record::{RECORD_SIZE, TaskRecord},
    strategy::{PhaseReport, open_read, open_read_write},
};

/// Encodes `count` replacement records back-to-back into one buffer, writes
/// it with a single call at the start of the file, then syncs.
pub(crate) fn write(path: &Path, count: usize) -> Result<PhaseReport, Error> {
    let start = Instant::now();

    let mut buffer = vec![0u8; count * RECORD_SIZE];
    for (i, chunk) in buffer.chunks_exact_mut(RECORD_SIZE).enumerate() {
        let record = TaskRecord::new(
            i as i32,
            &format!("buffered write test {i}"),
            i % 3 == 0,
            200 + i as i32,
        );
        record.encode_into(chunk)?;
    }

    let mut file = open_read_write(path)?;
    file.write_all(&buffer)
        .map_err(|source| Error::io(path, "failed to write record buffer", source))?;
    file.sync_all()
        .map_err(|source| Error::io(path, "failed to sync file", source))?;

    Ok(PhaseReport {
        elapsed: start.elapsed(),
        records: count,
    })
}

/// Reads `count` records sequentially from the start of the file, decoding
/// and discarding each.
pub(crate) fn read(path: &Path, count: usize) -> Result<PhaseReport, Error> {
    let mut file = open_read(path)?;

    let mut buf = [0u8; RECORD_SIZE];
    let start = Instant::now();

    for _ in 0..count {
        file.read_exact(&mut buf)
            .map_err(|source| Error::io(path, "failed to read record", source))?;
        let _record = TaskRecord::decode(&buf)?;
    }

    Ok(PhaseReport {
        elapsed: start.elapsed(),
        records: count,
    })
}
