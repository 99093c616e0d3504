//! Batch adapter for prime filtering.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter with optional parallel
//! processing. It filters a complete candidate sequence held in memory.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire sequence in a single pass.
//! * **Delegation**: Delegates computation to the `primes` execution engine.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastPrimes extension).
//! * **Generics**: Generic over primitive integer types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Pass Injection**: Installs `filter_pass_parallel` into the base builder.
//! * **Sequential Fallback**: `parallel(false)` runs the base sequential pass.
//!
//! ## Invariants
//!
//! * Parallel and sequential runs return the same set of primes.
//! * Sequential output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not generate candidates.
//! * This adapter does not sort parallel output.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::filter_pass_parallel;

// External dependencies
use num_traits::PrimInt;
use std::result::Result;

// Export dependencies from primes crate
use primes::internals::adapters::batch::BatchPrimesBuilder;
use primes::internals::engine::executor::PredicateFn;
use primes::internals::engine::output::PrimeResult;
use primes::internals::primitives::collector::Collector;
use primes::internals::primitives::errors::PrimesError;

// Internal dependencies
use crate::input::PrimesInput;

// ============================================================================
// Extended Batch Primes Builder
// ============================================================================

/// Builder for batch prime filter processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchPrimesBuilder<T> {
    /// Base builder from the primes crate
    pub base: BatchPrimesBuilder<T>,
}

impl<T: PrimInt> Default for ParallelBatchPrimesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> ParallelBatchPrimesBuilder<T> {
    /// Create a new batch builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from primes BatchPrimesBuilder
    /// * parallel: true (fastPrimes extension)
    fn new() -> Self {
        let base = BatchPrimesBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of candidates per work unit.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.base = self.base.chunk_size(chunk_size);
        self
    }

    /// Set the number of worker threads (dedicated pool).
    pub fn threads(mut self, threads: usize) -> Self {
        self.base = self.base.threads(threads);
        self
    }

    /// Set the concurrent result container.
    pub fn collector(mut self, collector: Collector) -> Self {
        self.base = self.base.collector(collector);
        self
    }

    /// Replace the per-candidate predicate.
    pub fn predicate(mut self, predicate: PredicateFn<T>) -> Self {
        self.base = self.base.predicate(predicate);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchPrimes<T>, PrimesError> {
        // Validate by attempting to build the base processor
        let _ = self.base.clone().build()?;

        Ok(ParallelBatchPrimes { config: self })
    }
}

// ============================================================================
// Extended Batch Primes Processor
// ============================================================================

/// Batch prime filter processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchPrimes<T> {
    config: ParallelBatchPrimesBuilder<T>,
}

impl<T: PrimInt + Send + Sync + 'static> ParallelBatchPrimes<T> {
    /// Filter `candidates`, returning every prime they contain.
    ///
    /// In parallel mode the returned primes are unordered.
    pub fn filter<I>(&self, candidates: &I) -> Result<PrimeResult<T>, PrimesError>
    where
        I: PrimesInput<T> + ?Sized,
    {
        let slice = candidates.as_candidate_slice()?;

        // Configure the base builder with parallel callback if enabled
        let mut builder = self.config.base.clone();

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_filter_pass(filter_pass_parallel);
            } else {
                builder.custom_filter_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_filter_pass = None;
        }

        // Delegate execution to the base implementation
        let processor = builder.build()?;
        processor.filter(slice)
    }
}
