//! Tests for the dataset generator.

use std::{fs, io, path::Path};

use record_bench::{BenchConfig, Error, RECORD_SIZE, TaskRecord, dataset};
use tempfile::TempDir;

fn temp_config(dir: &TempDir, records: usize) -> BenchConfig {
    BenchConfig::new(dir.path().join("tasks_data.bin"))
        .with_dataset_records(records)
        .with_seed(7)
}

fn read_record(path: &Path, index: usize) -> TaskRecord {
    let bytes = fs::read(path).expect("read dataset file");
    let start = index * RECORD_SIZE;
    TaskRecord::decode(&bytes[start..start + RECORD_SIZE]).expect("decode record")
}

#[test]
fn file_length_is_record_count_times_stride() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = temp_config(&dir, 500);

    dataset::generate(&config, &mut config.rng()).expect("generate dataset");

    let len = fs::metadata(config.path()).expect("stat dataset").len();
    assert_eq!(len, 500 * RECORD_SIZE as u64);
}

#[test]
fn ids_are_sequential_from_one() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = temp_config(&dir, 25);

    dataset::generate(&config, &mut config.rng()).expect("generate dataset");

    assert_eq!(read_record(config.path(), 0).id(), 1);
    assert_eq!(read_record(config.path(), 12).id(), 13);
    assert_eq!(read_record(config.path(), 24).id(), 25);
}

#[test]
fn descriptions_embed_the_index() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = temp_config(&dir, 10);

    dataset::generate(&config, &mut config.rng()).expect("generate dataset");

    let record = read_record(config.path(), 3);
    assert_eq!(
        record.description(),
        "Task Description #4 with some random text."
    );
}

#[test]
fn amounts_stay_in_range() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = temp_config(&dir, 200);

    dataset::generate(&config, &mut config.rng()).expect("generate dataset");

    let bytes = fs::read(config.path()).expect("read dataset file");
    for chunk in bytes.chunks_exact(RECORD_SIZE) {
        let record = TaskRecord::decode(chunk).expect("decode record");
        assert!((10..=999).contains(&record.amount()));
    }
}

#[test]
fn seeded_generation_is_deterministic() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let first = BenchConfig::new(dir.path().join("a.bin"))
        .with_dataset_records(100)
        .with_seed(99);
    let second = BenchConfig::new(dir.path().join("b.bin"))
        .with_dataset_records(100)
        .with_seed(99);

    dataset::generate(&first, &mut first.rng()).expect("generate first dataset");
    dataset::generate(&second, &mut second.rng()).expect("generate second dataset");

    let a = fs::read(first.path()).expect("read first dataset");
    let b = fs::read(second.path()).expect("read second dataset");
    assert_eq!(a, b);
}

#[test]
fn refuses_to_overwrite_an_existing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = temp_config(&dir, 10);
    fs::write(config.path(), b"already here").expect("seed existing file");

    let err = dataset::generate(&config, &mut config.rng()).expect_err("existing file must fail");
    match err {
        Error::Io { source, .. } => assert_eq!(source.kind(), io::ErrorKind::AlreadyExists),
        other => panic!("expected I/O error, got {other}"),
    }
}
