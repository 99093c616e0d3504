//! Error types for prime filtering operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while preparing
//! or running a prime filter pass: candidate range construction, builder
//! parameter constraints, worker pool setup and input conversion.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (limit, chunk size, ...).
//! * **Build-time**: Builder misconfiguration is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Range construction**: The inclusive upper end `limit + 1` must be representable.
//! 2. **Parameter validation**: Chunk size and thread count must be non-zero.
//! 3. **Execution setup**: A dedicated worker pool may fail to start.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A worker failure during a pass is never mapped to an error value; it
//!   propagates as a panic so results are never silently partial.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for prime filtering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimesError {
    /// The candidate range end (`limit + 1`) overflows the candidate type.
    LimitOverflow {
        /// The requested upper bound.
        limit: u128,
    },

    /// The candidate range is too large to hold in memory.
    CapacityOverflow {
        /// The requested upper bound.
        limit: u128,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Chunk size must be at least 1.
    InvalidChunkSize(usize),

    /// Worker thread count must be at least 1.
    InvalidThreads(usize),

    /// A dedicated worker pool could not be created.
    ThreadPool(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrimesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LimitOverflow { limit } => {
                write!(
                    f,
                    "Limit overflow: {limit} + 1 does not fit in the candidate type"
                )
            }
            Self::CapacityOverflow { limit } => {
                write!(
                    f,
                    "Capacity overflow: candidate range for limit {limit} is too large to allocate"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidChunkSize(size) => {
                write!(f, "Invalid chunk_size: {size} (must be at least 1)")
            }
            Self::InvalidThreads(threads) => {
                write!(f, "Invalid threads: {threads} (must be at least 1)")
            }
            Self::ThreadPool(msg) => write!(f, "Failed to build worker pool: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PrimesError {}
