//! Prime filter benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10K to 1M candidates)
//! - Collector choice (lock-free vs mutex)
//! - Chunk size sensitivity
//!
//! For sequential execution only, use `FASTPRIMES_BACKEND=serial cargo bench`.
//! For parallel execution only, use `FASTPRIMES_BACKEND=parallel cargo bench`.
//! With neither, both strategies are measured side by side.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastPrimes::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn strategies() -> Vec<(bool, &'static str)> {
    match env::var("FASTPRIMES_BACKEND").ok().as_deref() {
        Some("serial") | Some("sequential") => vec![(false, "serial")],
        Some("parallel") => vec![(true, "parallel")],
        _ => vec![(false, "serial"), (true, "parallel")],
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for limit in [10_000u64, 100_000, 1_000_000] {
        let input = candidates(limit).unwrap();
        group.throughput(Throughput::Elements(input.len() as u64));

        for (parallel, name) in strategies() {
            let model = Primes::<u64>::new()
                .adapter(Batch)
                .parallel(parallel)
                .build()
                .unwrap();
            group.bench_with_input(BenchmarkId::new(name, limit), &input, |b, input| {
                b.iter(|| model.filter(black_box(input)).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_collectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("collectors");
    group.sample_size(20);
    let input = candidates(500_000u64).unwrap();

    for (collector, name) in [(LockFree, "lock_free"), (Locked, "locked")] {
        let model = Primes::<u64>::new()
            .collector(collector)
            .adapter(Batch)
            .build()
            .unwrap();
        group.bench_function(name, |b| b.iter(|| model.filter(black_box(&input)).unwrap()));
    }

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_size");
    group.sample_size(20);
    let input = candidates(500_000u64).unwrap();

    for chunk_size in [64usize, 1_024, 16_384, 131_072] {
        let model = Primes::<u64>::new()
            .chunk_size(chunk_size)
            .adapter(Batch)
            .build()
            .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &input,
            |b, input| b.iter(|| model.filter(black_box(input)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scalability, bench_collectors, bench_chunk_sizes);
criterion_main!(benches);
