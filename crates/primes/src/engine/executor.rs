//! Execution engine for prime filter passes.
//!
//! ## Purpose
//!
//! This module runs one filter pass over a candidate sequence. It owns the
//! sequential pass and the hook through which extension crates substitute
//! their own (parallel) pass.
//!
//! ## Design notes
//!
//! * A pass is a plain function pointer so extensions can inject it without
//!   the core crate knowing about threads.
//! * The predicate is part of the configuration and defaults to `is_prime`.
//! * Generic over primitive integer types.
//!
//! ## Invariants
//!
//! * The sequential pass preserves input order.
//! * Candidates are only ever borrowed immutably.
//! * A pass either returns every prime in the input or does not return.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not create threads (handled by extension crates).
//! * This module does not format results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::primality::is_prime;
use crate::engine::output::Strategy;
use crate::primitives::collector::Collector;
use crate::primitives::errors::PrimesError;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for the per-candidate predicate.
pub type PredicateFn<T> = fn(T) -> bool;

/// Signature for custom filter pass function
#[doc(hidden)]
pub type FilterPassFn<T> = fn(
    &[T],             // candidates
    &PrimesConfig<T>, // full configuration
) -> Result<FilterOutput<T>, PrimesError>;

/// Output from one filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutput<T> {
    /// Candidates that satisfied the predicate.
    pub primes: Vec<T>,

    /// Whether `primes` follows input order.
    pub ordered: bool,

    /// Strategy that produced the output.
    pub strategy: Strategy,

    /// Number of worker threads that served the pass.
    pub workers: usize,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one filter pass.
#[derive(Debug, Clone)]
pub struct PrimesConfig<T> {
    /// Candidates per work unit. `None` lets the pass choose.
    pub chunk_size: Option<usize>,

    /// Worker thread count. `None` uses the shared pool.
    pub threads: Option<usize>,

    /// Concurrent container used by parallel passes.
    pub collector: Collector,

    /// Per-candidate predicate.
    pub predicate: PredicateFn<T>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom filter pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: PrimInt> Default for PrimesConfig<T> {
    fn default() -> Self {
        Self {
            chunk_size: None,
            threads: None,
            collector: Collector::default(),
            predicate: is_prime::<T>,
            custom_filter_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for filter passes.
pub struct PrimesExecutor;

impl PrimesExecutor {
    /// Run one pass over `candidates` using `config`.
    pub fn run_with_config<T: PrimInt>(
        candidates: &[T],
        config: &PrimesConfig<T>,
    ) -> Result<FilterOutput<T>, PrimesError> {
        match config.custom_filter_pass {
            Some(pass) if config.parallel => {
                debug!("running custom pass over {} candidates", candidates.len());
                pass(candidates, config)
            }
            _ => {
                debug!("running sequential pass over {} candidates", candidates.len());
                Ok(FilterOutput {
                    primes: filter_pass_sequential(candidates, config.predicate),
                    ordered: true,
                    strategy: Strategy::Sequential,
                    workers: 1,
                })
            }
        }
    }
}

/// Filter `candidates` on the calling thread, preserving input order.
pub fn filter_pass_sequential<T: Copy>(candidates: &[T], predicate: PredicateFn<T>) -> Vec<T> {
    let primes: Vec<T> = candidates
        .iter()
        .copied()
        .filter(|&n| predicate(n))
        .collect();
    trace!(
        "sequential pass kept {} of {} candidates",
        primes.len(),
        candidates.len()
    );
    primes
}
