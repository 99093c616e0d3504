//! Candidate sequence construction.
//!
//! ## Purpose
//!
//! This module builds the ordered sequence of integers that a filter pass
//! tests for primality. The sequence is generated once per run and shared
//! read-only by every strategy that consumes it.
//!
//! ## Design notes
//!
//! * **Inclusive**: The range runs from 2 up to and including `limit + 1`.
//! * **Degenerate ranges**: A limit below 2 yields an empty sequence.
//! * **Overflow-safe**: `limit + 1` is computed with a checked add, and the
//!   iteration stops on equality so the last element never increments past
//!   the end of the type.
//! * **Fallible allocation**: The whole range is reserved up front with
//!   `try_reserve_exact`; a range too large for memory is an error.
//! * **Generics**: Generic over primitive integer types.
//!
//! ## Invariants
//!
//! * The output is strictly increasing.
//! * Every element is at least 2.
//!
//! ## Non-goals
//!
//! * This module does not test primality.
//! * This module does not produce lazy or chunked ranges.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::PrimesError;

// ============================================================================
// Candidate Generation
// ============================================================================

/// Build the candidate sequence `[2, limit + 1]`.
///
/// Returns an empty vector when `limit < 2`, and `CapacityOverflow` when the
/// range cannot be allocated.
pub fn candidates<T: PrimInt>(limit: T) -> Result<Vec<T>, PrimesError> {
    let two = T::one() + T::one();
    if limit < two {
        return Ok(Vec::new());
    }

    let end = limit
        .checked_add(&T::one())
        .ok_or_else(|| PrimesError::LimitOverflow {
            limit: limit.to_u128().unwrap_or(u128::MAX),
        })?;

    let too_large = || PrimesError::CapacityOverflow {
        limit: limit.to_u128().unwrap_or(u128::MAX),
    };
    let len = end.to_usize().ok_or_else(too_large)? - 1;
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| too_large())?;

    let mut n = two;
    loop {
        out.push(n);
        if n == end {
            break;
        }
        n = n + T::one();
    }

    Ok(out)
}
