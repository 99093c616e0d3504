//! Batch adapter for prime filtering.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It filters a complete
//! candidate sequence held in memory and returns every prime in it.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire sequence in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built processor can filter any number of inputs.
//! * **Generics**: Generic over primitive integer types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Pass Injection**: Extension crates install a custom pass through the
//!   hidden `custom_filter_pass` setter.
//!
//! ## Invariants
//!
//! * Without a custom pass, output order matches input order.
//! * The input slice is never modified.
//!
//! ## Non-goals
//!
//! * This adapter does not generate candidates (see `candidates`).
//! * This adapter does not spawn threads.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::primality::is_prime;
use crate::engine::executor::{FilterPassFn, PredicateFn, PrimesConfig, PrimesExecutor};
use crate::engine::output::PrimeResult;
use crate::engine::validator::Validator;
use crate::primitives::collector::Collector;
use crate::primitives::errors::PrimesError;

// ============================================================================
// Batch Primes Builder
// ============================================================================

/// Builder for batch prime filter processor.
#[derive(Debug, Clone)]
pub struct BatchPrimesBuilder<T> {
    /// Candidates per work unit
    pub chunk_size: Option<usize>,

    /// Worker thread count
    pub threads: Option<usize>,

    /// Concurrent container for parallel passes
    pub collector: Collector,

    /// Per-candidate predicate
    pub predicate: PredicateFn<T>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom filter pass function.
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: PrimInt> Default for BatchPrimesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> BatchPrimesBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            chunk_size: None,
            threads: None,
            collector: Collector::default(),
            predicate: is_prime::<T>,
            custom_filter_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of candidates per work unit.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Set the number of worker threads.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the concurrent result container.
    pub fn collector(mut self, collector: Collector) -> Self {
        self.collector = collector;
        self
    }

    /// Replace the per-candidate predicate.
    pub fn predicate(mut self, predicate: PredicateFn<T>) -> Self {
        self.predicate = predicate;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom filter pass function.
    #[doc(hidden)]
    pub fn custom_filter_pass(mut self, pass: FilterPassFn<T>) -> Self {
        self.custom_filter_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchPrimes<T>, PrimesError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(chunk_size) = self.chunk_size {
            Validator::validate_chunk_size(chunk_size)?;
        }

        if let Some(threads) = self.threads {
            Validator::validate_threads(threads)?;
        }

        Ok(BatchPrimes { config: self })
    }
}

// ============================================================================
// Batch Primes Processor
// ============================================================================

/// Batch prime filter processor.
#[derive(Debug, Clone)]
pub struct BatchPrimes<T> {
    config: BatchPrimesBuilder<T>,
}

impl<T: PrimInt> BatchPrimes<T> {
    /// Filter `candidates`, returning every prime they contain.
    pub fn filter(&self, candidates: &[T]) -> Result<PrimeResult<T>, PrimesError> {
        let config = PrimesConfig {
            chunk_size: self.config.chunk_size,
            threads: self.config.threads,
            collector: self.config.collector,
            predicate: self.config.predicate,
            // ++++++++++++++++++++++++++++++++++++++
            // +               DEV                  +
            // ++++++++++++++++++++++++++++++++++++++
            custom_filter_pass: self.config.custom_filter_pass,
            parallel: self.config.parallel.unwrap_or(false),
        };

        let output = PrimesExecutor::run_with_config(candidates, &config)?;

        Ok(PrimeResult {
            primes: output.primes,
            candidates: candidates.len(),
            ordered: output.ordered,
            strategy: output.strategy,
            workers: output.workers,
        })
    }
}
