//! Benchmarks for BIN prefix lookup
//!
//! Measures the linear scan at store sizes typical of a BIN data file,
//! for early hits, late hits and misses.

use binlookup_core::{lookup, BinRecord, RecordStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Map};

/// Generate a store of sequential six-to-eight digit BINs
fn generate_store(n: usize) -> RecordStore {
    let records = (0..n)
        .map(|i| {
            let mut fields = Map::new();
            fields.insert("number".to_string(), json!(format!("{:06}", 400_000 + i)));
            fields.insert("issuer".to_string(), json!(format!("Bank {}", i)));
            fields.insert("scheme".to_string(), json!("visa"));
            BinRecord::new(fields)
        })
        .collect();
    RecordStore::from_records(records)
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000usize, 10_000, 50_000] {
        let store = generate_store(size);
        let first = format!("{:06}", 400_000);
        let last = format!("{:06}", 400_000 + size - 1);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("first", size), &store, |b, store| {
            b.iter(|| lookup(black_box(store), black_box(&first)))
        });
        group.bench_with_input(BenchmarkId::new("last", size), &store, |b, store| {
            b.iter(|| lookup(black_box(store), black_box(&last)))
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &store, |b, store| {
            b.iter(|| lookup(black_box(store), black_box("999999")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
