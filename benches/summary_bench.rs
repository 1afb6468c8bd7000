//! Benchmarks for loading, cleaning, and report serialization.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::explicit_iter_loop,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use resumen::{Dataset, Summarizer};

/// Builds a CSV document mixing valid, invalid, and blank value cells.
fn synthetic_csv(rows: usize) -> String {
    let mut data = String::with_capacity(rows * 16);
    data.push_str("value,category\n");
    for i in 0..rows {
        match i % 10 {
            7 => data.push_str(&format!("bad,c{}\n", i % 7)),
            8 => data.push_str(&format!(",c{}\n", i % 7)),
            _ => data.push_str(&format!("{}.5,c{}\n", i, i % 7)),
        }
    }
    data
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_csv");

    for size in [1_000, 10_000, 100_000].iter() {
        let data = synthetic_csv(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Dataset::from_csv_str(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for size in [1_000, 10_000, 100_000].iter() {
        let dataset = Dataset::from_csv_str(&synthetic_csv(*size)).unwrap();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &dataset, |b, dataset| {
            b.iter(|| Summarizer::new().summarize(black_box(dataset)).unwrap());
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let dataset = Dataset::from_csv_str(&synthetic_csv(10_000)).unwrap();
    let analysis = Summarizer::new().summarize(&dataset).unwrap();

    c.bench_function("report_to_json", |b| {
        b.iter(|| black_box(&analysis.report).to_json().unwrap());
    });
}

criterion_group!(benches, bench_load, bench_summarize, bench_serialize);
criterion_main!(benches);
