//! Tests for strategy reports and timing.

use fastPrimes::prelude::*;
use fastPrimes::report::{timed, Preview, StrategyReport};
use std::time::Duration;

fn result(limit: u32, parallel: bool) -> PrimeResult<u32> {
    let c = candidates(limit).unwrap();
    Primes::new()
        .adapter(Batch)
        .parallel(parallel)
        .build()
        .unwrap()
        .filter(&c)
        .unwrap()
}

/// Test the sequential report layout.
#[test]
fn test_sequential_report() {
    let res = result(1_000, false);
    let report = StrategyReport::new(
        "Sequential filter",
        &res,
        Duration::from_millis(42),
        Preview::Head(20),
    );

    let text = report.to_string();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("Sequential filter | Total prime numbers : 168 | Time Taken : 42 ms.")
    );
    assert_eq!(
        lines.next(),
        Some("2 3 5 7 11 13 17 19 23 29 31 37 41 43 47 53 59 61 67 71")
    );
    assert_eq!(lines.next(), None);
}

/// Test the parallel report shows sorted primes below the bound.
#[test]
fn test_parallel_report() {
    let res = result(1_000, true);
    let report = StrategyReport::new(
        "Parallel filter",
        &res,
        Duration::from_micros(1_999),
        Preview::SortedBelow(80),
    );

    let text = report.to_string();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("Parallel filter   | Total prime numbers : 168 | Time Taken : 1 ms.")
    );
    assert_eq!(
        lines.next(),
        Some("2 3 5 7 11 13 17 19 23 29 31 37 41 43 47 53 59 61 67 71 73 79")
    );
}

/// Test an empty result renders an empty sample line.
#[test]
fn test_empty_report() {
    let res = result(1, true);
    let report = StrategyReport::new("Parallel filter", &res, Duration::ZERO, Preview::SortedBelow(80));

    assert!(report.sample().is_empty());
    assert_eq!(
        report.to_string(),
        "Parallel filter   | Total prime numbers : 0 | Time Taken : 0 ms.\n"
    );
}

/// Test timing returns the closure's output.
#[test]
fn test_timed() {
    let (value, elapsed) = timed(|| {
        std::thread::sleep(Duration::from_millis(5));
        7
    });

    assert_eq!(value, 7);
    assert!(elapsed >= Duration::from_millis(5));
}
