//! High-level API for prime filtering with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for parallel
//! prime filtering. It extends the `primes` API with an adapter that uses
//! all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `primes` builder pattern.
//! * **Parallel-First**: The `Batch` adapter defaults to parallel execution.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrimesBuilder`] via `Primes::new()`.
//! 2. Chain configuration methods (`.threads()`, `.collector()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchPrimesBuilder;

// External dependencies
use num_traits::PrimInt;

// Import base marker types for delegation
use primes::internals::api::Batch as BaseBatch;

// Publicly re-exported types
pub use primes::internals::api::{
    candidates, is_prime, Collector, PrimeResult, PrimesAdapter, PrimesBuilder, PrimesError,
    Strategy,
};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: PrimInt> PrimesAdapter<T> for Batch {
    type Output = ParallelBatchPrimesBuilder<T>;

    fn convert(builder: PrimesBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastPrimes Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as PrimesAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelBatchPrimesBuilder { base }
    }
}
