//! Output types for prime filter passes.
//!
//! ## Purpose
//!
//! This module defines `PrimeResult`, which holds the primes found by one
//! pass together with the metadata needed to interpret them (input size,
//! ordering guarantee, strategy, worker count).
//!
//! ## Design notes
//!
//! * **Ownership**: A result is handed to the caller and never touched by
//!   the library again.
//! * **Ordering**: Parallel results carry `ordered == false`; helpers that
//!   need order sort a copy instead of mutating the result.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `primes.len() <= candidates`.
//! * If `ordered` is true, `primes` is in input order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not time passes (handled by callers).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::PrimInt;

// ============================================================================
// Strategy
// ============================================================================

/// Execution strategy that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Single-threaded, order-preserving pass.
    Sequential,

    /// Fan-out/collect pass over a worker pool.
    Parallel,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Sequential => write!(f, "Sequential"),
            Self::Parallel => write!(f, "Parallel"),
        }
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Primes found by one filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeResult<T> {
    /// Primes found. In input order only if `ordered` is true.
    pub primes: Vec<T>,

    /// Number of candidates tested.
    pub candidates: usize,

    /// Whether `primes` preserves input order.
    pub ordered: bool,

    /// Strategy that produced the result.
    pub strategy: Strategy,

    /// Worker threads that served the pass.
    pub workers: usize,
}

impl<T: PrimInt> PrimeResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of primes found.
    pub fn count(&self) -> usize {
        self.primes.len()
    }

    /// Check whether no primes were found.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// First `n` primes as stored.
    pub fn head(&self, n: usize) -> &[T] {
        &self.primes[..n.min(self.primes.len())]
    }

    /// All primes in ascending order.
    pub fn sorted(&self) -> Vec<T> {
        let mut out = self.primes.clone();
        out.sort_unstable();
        out
    }

    /// Primes strictly below `bound`, ascending.
    pub fn sorted_below(&self, bound: T) -> Vec<T> {
        let mut out: Vec<T> = self.primes.iter().copied().filter(|&p| p < bound).collect();
        out.sort_unstable();
        out
    }

    /// Check whether `value` was found.
    pub fn contains(&self, value: T) -> bool {
        self.primes.contains(&value)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: PrimInt + Display> Display for PrimeResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Strategy:   {}", self.strategy)?;
        writeln!(f, "  Candidates: {}", self.candidates)?;
        writeln!(f, "  Primes:     {}", self.count())?;
        writeln!(f, "  Workers:    {}", self.workers)?;
        writeln!(f)?;

        writeln!(f, "Primes:")?;
        let values = self.sorted();
        let n = values.len();
        let shown: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in shown.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>12}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>12}", values[idx])?;
        }

        Ok(())
    }
}
