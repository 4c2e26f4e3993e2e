//! Memory-mapped I/O: records move directly through a mapped region.
//!
//! Writes copy encoded records into a read-write mapping and flush dirty
//! pages once at the end; reads decode records straight out of a read-only
//! mapping with no explicit read call. Both phases stay within the mapped
//! length: the write loop stops at the end of the mapping, and read offsets
//! are drawn from the complete records the mapping covers.

use std::{path::Path, time::Instant};

use memmap2::{Mmap, MmapMut};

use crate::{
    error::Error,
    record::{RECORD_SIZE, TaskRecord},
    strategy::{PhaseReport, open_read, open_read_write, random_record_offsets},
};

/// Offset added to the mapped write phase's synthetic record ids,
/// distinguishing its records from the other strategies' output.
pub const ID_BASE: usize = 100_000;

/// Writes up to `count` replacement records through a read-write mapping of
/// the whole file, then flushes dirty pages.
///
/// The loop terminates early rather than write past the mapping, so the
/// report's record count can be less than `count` for a short file.
pub(crate) fn write(path: &Path, count: usize) -> Result<PhaseReport, Error> {
    let start = Instant::now();

    let file = open_read_write(path)?;
    // Safety: the mapping is private to this phase and the file is never
    // resized while mapped.
    #[allow(unsafe_code)]
    let mut mmap = unsafe { MmapMut::map_mut(&file) }
        .map_err(|source| Error::io(path, "failed to map file read-write", source))?;

    let mut written = 0;
    for i in 0..count {
        let position = i * RECORD_SIZE;
        if position + RECORD_SIZE > mmap.len() {
            break;
        }

        let record = TaskRecord::new(
            (ID_BASE + i) as i32,
            &format!("mapped write test {i}"),
            i % 4 == 0,
            500 + i as i32,
        );
        record.encode_into(&mut mmap[position..position + RECORD_SIZE])?;
        written += 1;
    }

    mmap.flush()
        .map_err(|source| Error::io(path, "failed to flush mapping", source))?;

    Ok(PhaseReport {
        elapsed: start.elapsed(),
        records: written,
    })
}

/// Decodes `count` records at random record-aligned offsets directly from a
/// read-only mapping, discarding each.
pub(crate) fn read(path: &Path, count: usize, rng: &mut fastrand::Rng) -> Result<PhaseReport, Error> {
    let file = open_read(path)?;
    // Safety: the file is not truncated or resized for the life of the map.
    #[allow(unsafe_code)]
    let mmap = unsafe { Mmap::map(&file) }
        .map_err(|source| Error::io(path, "failed to map file read-only", source))?;

    let offsets = random_record_offsets(rng, mmap.len() as u64, count)?;
    let start = Instant::now();

    for offset in offsets {
        let position = offset as usize;
        let _record = TaskRecord::decode(&mmap[position..position + RECORD_SIZE])?;
    }

    Ok(PhaseReport {
        elapsed: start.elapsed(),
        records: count,
    })
}
