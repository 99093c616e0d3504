//! High-level API for prime filtering.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring a filter pass and choosing an execution
//! adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over primitive integer types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrimesBuilder`] via `Primes::new()`.
//! 2. Chain configuration methods (`.chunk_size()`, `.threads()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::adapters::batch::BatchPrimesBuilder;
use crate::engine::executor::{FilterPassFn, PredicateFn};

// Publicly re-exported types
pub use crate::algorithms::primality::is_prime;
pub use crate::engine::output::{PrimeResult, Strategy};
pub use crate::primitives::candidates::candidates;
pub use crate::primitives::collector::Collector;
pub use crate::primitives::errors::PrimesError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

/// Fluent builder for configuring filter passes and execution modes.
#[derive(Debug, Clone)]
pub struct PrimesBuilder<T> {
    /// Candidates per work unit.
    pub chunk_size: Option<usize>,

    /// Worker thread count.
    pub threads: Option<usize>,

    /// Concurrent container for parallel passes.
    pub collector: Option<Collector>,

    /// Per-candidate predicate (default: `is_prime`).
    pub predicate: Option<PredicateFn<T>>,

    // ======================================
    // DEV
    // ======================================
    /// Custom filter pass function.
    #[doc(hidden)]
    pub custom_filter_pass: Option<FilterPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: PrimInt> Default for PrimesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> PrimesBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: PrimesAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            chunk_size: None,
            threads: None,
            collector: None,
            predicate: None,
            custom_filter_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of candidates per work unit.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        if self.chunk_size.is_some() {
            self.duplicate_param = Some("chunk_size");
        }
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Set the number of worker threads for parallel passes.
    pub fn threads(mut self, threads: usize) -> Self {
        if self.threads.is_some() {
            self.duplicate_param = Some("threads");
        }
        self.threads = Some(threads);
        self
    }

    /// Set the concurrent result container for parallel passes.
    pub fn collector(mut self, collector: Collector) -> Self {
        if self.collector.is_some() {
            self.duplicate_param = Some("collector");
        }
        self.collector = Some(collector);
        self
    }

    /// Replace the per-candidate predicate.
    pub fn predicate(mut self, predicate: PredicateFn<T>) -> Self {
        if self.predicate.is_some() {
            self.duplicate_param = Some("predicate");
        }
        self.predicate = Some(predicate);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom filter pass function.
    #[doc(hidden)]
    pub fn custom_filter_pass(mut self, pass: FilterPassFn<T>) -> Self {
        self.custom_filter_pass = Some(pass);
        self
    }
}

// ============================================================================
// Adapter Trait
// ============================================================================

/// Conversion from the generic builder into an adapter-specific builder.
pub trait PrimesAdapter<T> {
    /// Adapter-specific builder type.
    type Output;

    /// Convert a configured `PrimesBuilder`.
    fn convert(builder: PrimesBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: PrimInt> PrimesAdapter<T> for Batch {
    type Output = BatchPrimesBuilder<T>;

    fn convert(builder: PrimesBuilder<T>) -> Self::Output {
        let mut result = BatchPrimesBuilder::default();

        if let Some(chunk_size) = builder.chunk_size {
            result = result.chunk_size(chunk_size);
        }
        if let Some(threads) = builder.threads {
            result = result.threads(threads);
        }
        if let Some(collector) = builder.collector {
            result = result.collector(collector);
        }
        if let Some(predicate) = builder.predicate {
            result = result.predicate(predicate);
        }
        if let Some(pass) = builder.custom_filter_pass {
            result = result.custom_filter_pass(pass);
        }

        // Set parallel mode (core crate defaults to sequential)
        result.parallel = Some(builder.parallel.unwrap_or(false));
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
