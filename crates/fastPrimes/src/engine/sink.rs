//! Concurrent result containers for parallel passes.
//!
//! ## Purpose
//!
//! This module defines `ConcurrentSink`, the contract for the single
//! thread-safe collection that parallel workers push primes into, and its
//! two implementations.
//!
//! ## Design notes
//!
//! * **Per-call**: A sink is created for one pass, handed to the workers by
//!   reference, and consumed into a `Vec` once every worker has joined.
//! * **No external locking**: Callers never lock; each implementation owns
//!   its own synchronization.
//! * **Batching**: Workers hand over whole chunk results via `push_all`.
//!
//! ## Key concepts
//!
//! * **SegQueue**: Lock-free unbounded queue from `crossbeam`.
//! * **Mutex<Vec<T>>**: `parking_lot` mutex around a vector; one lock per chunk.
//!
//! ## Invariants
//!
//! * No insertion is lost under concurrent `push`/`push_all`.
//! * `into_vec` returns every inserted value exactly once, in unspecified order.

// External dependencies
use crossbeam::queue::SegQueue;
use parking_lot::Mutex;

// ============================================================================
// Sink Trait
// ============================================================================

/// Thread-safe collection that tolerates simultaneous insertions.
pub trait ConcurrentSink<T>: Sync {
    /// Insert one value.
    fn push(&self, value: T);

    /// Insert every value of a worker-local batch.
    fn push_all(&self, values: Vec<T>) {
        for value in values {
            self.push(value);
        }
    }

    /// Number of values currently stored.
    fn len(&self) -> usize;

    /// Check whether the sink is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the sink, returning its contents.
    fn into_vec(self) -> Vec<T>
    where
        Self: Sized;
}

// ============================================================================
// Implementations
// ============================================================================

impl<T: Send> ConcurrentSink<T> for SegQueue<T> {
    fn push(&self, value: T) {
        SegQueue::push(self, value);
    }

    fn len(&self) -> usize {
        SegQueue::len(self)
    }

    fn into_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(SegQueue::len(&self));
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }
}

impl<T: Send> ConcurrentSink<T> for Mutex<Vec<T>> {
    fn push(&self, value: T) {
        self.lock().push(value);
    }

    fn push_all(&self, mut values: Vec<T>) {
        self.lock().append(&mut values);
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn into_vec(self) -> Vec<T> {
        self.into_inner()
    }
}
