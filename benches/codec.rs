//! Benchmarks for the fixed-size record codec.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use record_bench::{RECORD_SIZE, TaskRecord};

fn bench_encode(c: &mut Criterion) {
    let record = TaskRecord::new(
        42,
        "Task Description #42 with some random text.",
        true,
        250,
    );

    c.bench_function("encode", |b| b.iter(|| black_box(&record).encode()));
}

fn bench_encode_into(c: &mut Criterion) {
    let record = TaskRecord::new(
        42,
        "Task Description #42 with some random text.",
        true,
        250,
    );
    let mut buf = [0u8; RECORD_SIZE];

    c.bench_function("encode_into", |b| {
        b.iter(|| {
            black_box(&record)
                .encode_into(&mut buf)
                .expect("record-sized span");
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes = TaskRecord::new(
        42,
        "Task Description #42 with some random text.",
        true,
        250,
    )
    .encode();

    c.bench_function("decode", |b| {
        b.iter(|| TaskRecord::decode(black_box(&bytes)).expect("valid record buffer"));
    });
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip", |b| {
        b.iter(|| {
            let record = TaskRecord::new(black_box(7), "round trip record", false, 99);
            TaskRecord::decode(&record.encode()).expect("valid record buffer")
        });
    });
}

criterion_group!(
    codec,
    bench_encode,
    bench_encode_into,
    bench_decode,
    bench_round_trip
);
criterion_main!(codec);
