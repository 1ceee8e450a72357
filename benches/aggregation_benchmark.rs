// ============================================================================
// Aggregation Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Validation - Cold parse vs cached lookup
// 2. List Aggregation - End-to-end summation of in-memory lists
// 3. File Aggregation - CSV column streaming
// ============================================================================

use addition_service::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::io::Write;

fn literals(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 3 {
            0 => format!("{}", i),
            1 => format!("{}.{:02}", i, i % 100),
            _ => format!("{}e-2", i),
        })
        .collect()
}

// ============================================================================
// Validation Benchmarks
// ============================================================================

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("cold", |b| {
        let mut validator = NumberValidator::new(1);
        let mut i = 0u64;
        b.iter(|| {
            // Capacity 1 forces a clear and a fresh parse every call
            i += 1;
            black_box(validator.validate(&format!("{}.125", i)))
        });
    });

    group.bench_function("cached", |b| {
        let mut validator = NumberValidator::default();
        validator.validate("12345.678");
        b.iter(|| black_box(validator.validate("12345.678")));
    });

    group.finish();
}

// ============================================================================
// List Aggregation Benchmarks
// ============================================================================

fn benchmark_list_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_aggregation");

    for count in [100, 1000, 10000].iter() {
        let source = ListSource::new(literals(*count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &source, |b, source| {
            let mut aggregator = Aggregator::default();
            b.iter(|| black_box(aggregator.aggregate(source)));
        });
    }

    group.finish();
}

// ============================================================================
// File Aggregation Benchmarks
// ============================================================================

fn benchmark_file_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_aggregation");

    for rows in [1000, 10000].iter() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "id,amount").unwrap();
        for (i, literal) in literals(*rows).iter().enumerate() {
            writeln!(file, "{},{}", i, literal).unwrap();
        }
        file.flush().unwrap();

        let source = FileSource::new(file.path(), 1, true);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &source, |b, source| {
            let mut aggregator = Aggregator::default();
            b.iter(|| black_box(aggregator.aggregate(source)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_validation,
    benchmark_list_aggregation,
    benchmark_file_aggregation
);
criterion_main!(benches);
