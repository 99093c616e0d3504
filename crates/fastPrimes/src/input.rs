//! Input abstractions for prime filtering.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for candidate inputs, allowing
//! the `filter` method to process multiple container types (slices, vectors,
//! ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffer.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected before any work starts.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container.
//!
//! ## Non-goals
//!
//! * This module does not sort or deduplicate candidates.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::PrimInt;

// Export dependencies from primes crate
use primes::internals::primitives::errors::PrimesError;

/// Trait for types that can be used as a candidate sequence.
pub trait PrimesInput<T: PrimInt> {
    /// Convert the input to a contiguous slice.
    fn as_candidate_slice(&self) -> Result<&[T], PrimesError>;
}

impl<T: PrimInt> PrimesInput<T> for [T] {
    fn as_candidate_slice(&self) -> Result<&[T], PrimesError> {
        Ok(self)
    }
}

impl<T: PrimInt> PrimesInput<T> for Vec<T> {
    fn as_candidate_slice(&self) -> Result<&[T], PrimesError> {
        Ok(self.as_slice())
    }
}

impl<T: PrimInt, S> PrimesInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_candidate_slice(&self) -> Result<&[T], PrimesError> {
        self.as_slice().ok_or_else(|| {
            PrimesError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
