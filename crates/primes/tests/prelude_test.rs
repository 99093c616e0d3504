//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for a
//! complete filtering workflow with a single import.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports

use primes::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the builder, adapter and result types are usable.
#[test]
fn test_prelude_imports() {
    let c = candidates(30u32).unwrap();
    let result: Result<PrimeResult<u32>, PrimesError> =
        Primes::new().adapter(Batch).build().unwrap().filter(&c);

    assert!(result.is_ok(), "Basic filter should work with prelude imports");
}

/// Test Collector variants are available.
#[test]
fn test_prelude_collectors() {
    let _ = Primes::<u32>::new().collector(LockFree);
    let _ = Primes::<u32>::new().collector(Locked);
}

/// Test the primality tester and strategy are available.
#[test]
fn test_prelude_helpers() {
    assert!(is_prime(97u32));
    assert_eq!(Strategy::Sequential.to_string(), "Sequential");
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a fully configured sequential workflow.
#[test]
fn test_prelude_full_workflow() {
    let c = candidates(99u64).unwrap();
    let result = Primes::new()
        .chunk_size(16)
        .threads(2)
        .collector(Locked)
        .adapter(Batch)
        .build()
        .unwrap()
        .filter(&c)
        .unwrap();

    assert_eq!(result.strategy, Strategy::Sequential);
    assert_eq!(result.count(), 25);
    assert_eq!(result.head(3), &[2, 3, 5]);
}
