//! Validation for filter configuration.
//!
//! ## Purpose
//!
//! This module checks builder parameters before a processor is created, so
//! a misconfigured pass fails at `build()` rather than mid-execution.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Nothing is allocated or spawned here.
//!
//! ## Invariants
//!
//! * A validated configuration never causes a pass to return an error,
//!   except for worker pool creation which depends on the host.
//!
//! ## Non-goals
//!
//! * This module does not build the candidate sequence (see `candidates`).
//! * This module does not correct invalid parameters.

// Internal dependencies
use crate::primitives::errors::PrimesError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter configuration.
pub struct Validator;

impl Validator {
    /// Validate an explicit chunk size.
    pub fn validate_chunk_size(chunk_size: usize) -> Result<(), PrimesError> {
        if chunk_size == 0 {
            return Err(PrimesError::InvalidChunkSize(chunk_size));
        }
        Ok(())
    }

    /// Validate an explicit worker thread count.
    pub fn validate_threads(threads: usize) -> Result<(), PrimesError> {
        if threads == 0 {
            return Err(PrimesError::InvalidThreads(threads));
        }
        Ok(())
    }

    /// Reject builders in which a parameter was configured twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), PrimesError> {
        match duplicate {
            Some(parameter) => Err(PrimesError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
