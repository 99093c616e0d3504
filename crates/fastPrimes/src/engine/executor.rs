//! Parallel execution engine for prime filter passes.
//!
//! ## Purpose
//!
//! This module provides the parallel filter pass that is injected into the
//! `primes` crate's execution engine. It fans the candidate sequence out
//! over a worker pool and collects the primes into one concurrent sink.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Partitioning**: Contiguous chunks via `par_chunks`; rayon balances them.
//! * **Collection**: Workers filter a chunk locally, then hand the batch to the sink.
//! * **Generics**: Generic over primitive integer types.
//!
//! ## Key concepts
//!
//! * **Shared pool**: Without `threads`, the global rayon pool (one worker per core).
//! * **Dedicated pool**: With `threads`, a pool built for this call only.
//! * **Join barrier**: The pass returns only after every chunk is processed.
//! * **Failure**: A panicking worker is re-raised on the calling thread after
//!   the join; no partial result is ever returned.
//!
//! ## Invariants
//!
//! * Every candidate is tested exactly once.
//! * The set of primes returned equals the sequential pass's set.
//! * Candidates are only borrowed immutably.
//!
//! ## Non-goals
//!
//! * This module does not order its output (caller's responsibility).
//! * This module does not validate configuration (handled by `validator`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crossbeam::queue::SegQueue;
#[cfg(feature = "cpu")]
use log::debug;
#[cfg(feature = "cpu")]
use num_traits::PrimInt;
#[cfg(feature = "cpu")]
use parking_lot::Mutex;
#[cfg(feature = "cpu")]
use rayon::prelude::*;
#[cfg(feature = "cpu")]
use rayon::ThreadPoolBuilder;

// Export dependencies from primes crate
#[cfg(feature = "cpu")]
use primes::internals::engine::executor::{FilterOutput, PredicateFn, PrimesConfig};
#[cfg(feature = "cpu")]
use primes::internals::engine::output::Strategy;
#[cfg(feature = "cpu")]
use primes::internals::primitives::collector::Collector;
#[cfg(feature = "cpu")]
use primes::internals::primitives::errors::PrimesError;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::sink::ConcurrentSink;

/// Chunks per worker when no chunk size is configured.
const CHUNKS_PER_WORKER: usize = 4;

// ============================================================================
// Parallel Filter Pass
// ============================================================================

/// Filter `candidates` across a worker pool.
#[cfg(feature = "cpu")]
pub fn filter_pass_parallel<T>(
    candidates: &[T],
    config: &PrimesConfig<T>,
) -> Result<FilterOutput<T>, PrimesError>
where
    T: PrimInt + Send + Sync,
{
    match config.threads {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("fastprimes-worker-{i}"))
                .build()
                .map_err(|e| PrimesError::ThreadPool(e.to_string()))?;
            Ok(pool.install(|| run_pass(candidates, config)))
        }
        None => Ok(run_pass(candidates, config)),
    }
}

/// Run the pass on whichever rayon pool is current.
#[cfg(feature = "cpu")]
fn run_pass<T>(candidates: &[T], config: &PrimesConfig<T>) -> FilterOutput<T>
where
    T: PrimInt + Send + Sync,
{
    let workers = rayon::current_num_threads();
    let chunk_size = config
        .chunk_size
        .unwrap_or_else(|| default_chunk_size(candidates.len(), workers));

    debug!(
        "parallel pass: {} candidates, chunk size {}, {} workers, {:?} collector",
        candidates.len(),
        chunk_size,
        workers,
        config.collector
    );

    let primes = match config.collector {
        Collector::LockFree => {
            collect_into(candidates, chunk_size, config.predicate, SegQueue::new())
        }
        Collector::Locked => collect_into(
            candidates,
            chunk_size,
            config.predicate,
            Mutex::new(Vec::new()),
        ),
    };

    FilterOutput {
        primes,
        ordered: false,
        strategy: Strategy::Parallel,
        workers,
    }
}

/// Fan `candidates` out in chunks and gather matches into `sink`.
///
/// Blocks until every chunk has been processed, then drains the sink.
#[cfg(feature = "cpu")]
pub fn collect_into<T, S>(
    candidates: &[T],
    chunk_size: usize,
    predicate: PredicateFn<T>,
    sink: S,
) -> Vec<T>
where
    T: Copy + Send + Sync,
    S: ConcurrentSink<T>,
{
    candidates.par_chunks(chunk_size).for_each(|chunk| {
        let found: Vec<T> = chunk.iter().copied().filter(|&n| predicate(n)).collect();
        if !found.is_empty() {
            sink.push_all(found);
        }
    });

    sink.into_vec()
}

/// Chunk size giving each worker a few chunks to balance uneven cost.
pub fn default_chunk_size(len: usize, workers: usize) -> usize {
    let units = workers.max(1) * CHUNKS_PER_WORKER;
    len.div_ceil(units).max(1)
}
