//! Tests for concurrent sinks and the chunked fan-out.
//!
//! ## Test Organization
//!
//! 1. **Sink Semantics** - No lost or duplicated insertions
//! 2. **Fan-out** - `collect_into` with an injected sink
//! 3. **Chunking** - Default chunk size

use crossbeam::queue::SegQueue;
#[cfg(feature = "cpu")]
use fastPrimes::internals::engine::executor::collect_into;
use fastPrimes::internals::engine::executor::default_chunk_size;
use fastPrimes::internals::engine::sink::ConcurrentSink;
#[cfg(feature = "cpu")]
use fastPrimes::prelude::*;
use parking_lot::Mutex;
use std::thread;

// ============================================================================
// Helper Functions
// ============================================================================

const WRITERS: u64 = 8;
const PER_WRITER: u64 = 5_000;

fn hammer<S: ConcurrentSink<u64>>(sink: S) -> Vec<u64> {
    thread::scope(|scope| {
        for w in 0..WRITERS {
            let sink = &sink;
            scope.spawn(move || {
                for i in 0..PER_WRITER {
                    sink.push(w * PER_WRITER + i);
                }
            });
        }
    });

    let mut out = sink.into_vec();
    out.sort_unstable();
    out
}

// ============================================================================
// Sink Semantics Tests
// ============================================================================

/// Test the lock-free sink under concurrent writers.
#[test]
fn test_segqueue_no_lost_updates() {
    let out = hammer(SegQueue::new());
    let expected: Vec<u64> = (0..WRITERS * PER_WRITER).collect();

    assert_eq!(out, expected);
}

/// Test the mutex sink under concurrent writers.
#[test]
fn test_mutex_no_lost_updates() {
    let out = hammer(Mutex::new(Vec::new()));
    let expected: Vec<u64> = (0..WRITERS * PER_WRITER).collect();

    assert_eq!(out, expected);
}

/// Test batch insertion and length tracking.
#[test]
fn test_push_all_and_len() {
    let queue: SegQueue<u32> = SegQueue::new();
    assert!(ConcurrentSink::is_empty(&queue));
    queue.push_all(vec![1, 2, 3]);
    assert_eq!(ConcurrentSink::len(&queue), 3);

    let locked: Mutex<Vec<u32>> = Mutex::new(vec![9]);
    locked.push_all(vec![1, 2, 3]);
    assert_eq!(ConcurrentSink::len(&locked), 4);
    assert_eq!(locked.into_vec(), vec![9, 1, 2, 3]);
}

// ============================================================================
// Fan-out Tests
// ============================================================================

/// Test that an injected sink receives every match exactly once.
#[test]
#[cfg(feature = "cpu")]
fn test_collect_into_injected_sink() {
    let c = candidates(10_000u64).unwrap();

    let mut from_queue = collect_into(&c, 97, is_prime, SegQueue::new());
    let mut from_mutex = collect_into(&c, 97, is_prime, Mutex::new(Vec::new()));
    from_queue.sort_unstable();
    from_mutex.sort_unstable();

    assert_eq!(from_queue.len(), 1_229);
    assert_eq!(from_queue, from_mutex);
}

/// Test that empty input leaves the sink empty.
#[test]
#[cfg(feature = "cpu")]
fn test_collect_into_empty() {
    let out = collect_into::<u64, _>(&[], 8, is_prime, SegQueue::new());
    assert!(out.is_empty());
}

// ============================================================================
// Chunking Tests
// ============================================================================

/// Test default chunk size selection.
#[test]
fn test_default_chunk_size() {
    assert_eq!(default_chunk_size(0, 8), 1);
    assert_eq!(default_chunk_size(10, 8), 1);
    assert_eq!(default_chunk_size(3_200, 8), 100);
    assert_eq!(default_chunk_size(3_201, 8), 101);
    assert_eq!(default_chunk_size(100, 0), 25, "zero workers treated as one");
}
