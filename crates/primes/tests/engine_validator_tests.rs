//! Tests for configuration validation.
//!
//! These tests verify the validation functions used before a filter pass:
//! - Chunk size and thread count bounds
//! - Duplicate builder parameters
//! - Error messages
//!
//! ## Test Organization
//!
//! 1. **Parameter Validation** - Chunk size, threads
//! 2. **Builder Validation** - Errors surfaced by `build()`
//! 3. **Error Messages** - Proper error reporting

use primes::internals::engine::validator::Validator;
use primes::prelude::*;

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test validation rejects a zero chunk size.
#[test]
fn test_validate_chunk_size() {
    assert_eq!(
        Validator::validate_chunk_size(0),
        Err(PrimesError::InvalidChunkSize(0))
    );
    assert!(Validator::validate_chunk_size(1).is_ok());
    assert!(Validator::validate_chunk_size(usize::MAX).is_ok());
}

/// Test validation rejects zero threads.
#[test]
fn test_validate_threads() {
    assert_eq!(
        Validator::validate_threads(0),
        Err(PrimesError::InvalidThreads(0))
    );
    assert!(Validator::validate_threads(4).is_ok());
}

/// Test duplicate detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("threads")),
        Err(PrimesError::DuplicateParameter {
            parameter: "threads"
        })
    );
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test that `build()` reports invalid parameters.
#[test]
fn test_build_rejects_invalid_parameters() {
    let res = Primes::<u32>::new().threads(0).adapter(Batch).build();
    assert!(matches!(res, Err(PrimesError::InvalidThreads(0))));

    let res = Primes::<u32>::new().chunk_size(0).adapter(Batch).build();
    assert!(matches!(res, Err(PrimesError::InvalidChunkSize(0))));
}

/// Test that `build()` reports parameters set twice.
#[test]
fn test_build_rejects_duplicates() {
    let res = Primes::<u32>::new()
        .chunk_size(16)
        .chunk_size(32)
        .adapter(Batch)
        .build();

    assert!(matches!(
        res,
        Err(PrimesError::DuplicateParameter {
            parameter: "chunk_size"
        })
    ));
}

/// Test that adapter-level setters may override freely.
#[test]
fn test_adapter_setters_do_not_flag_duplicates() {
    let res = Primes::<u32>::new()
        .adapter(Batch)
        .chunk_size(16)
        .chunk_size(32)
        .build();

    assert!(res.is_ok());
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test error messages carry the offending value.
#[test]
fn test_error_messages() {
    assert_eq!(
        PrimesError::InvalidChunkSize(0).to_string(),
        "Invalid chunk_size: 0 (must be at least 1)"
    );
    assert_eq!(
        PrimesError::InvalidThreads(0).to_string(),
        "Invalid threads: 0 (must be at least 1)"
    );
    assert!(PrimesError::ThreadPool("no threads".into())
        .to_string()
        .contains("no threads"));
}
