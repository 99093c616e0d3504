//! # primes: Trial-Division Prime Filtering for Rust
//!
//! Finds every prime in a candidate sequence with a pluggable execution pass.
//! This crate ships the order-preserving sequential pass; the `fastPrimes`
//! crate injects a parallel fan-out/collect pass through the same API.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use primes::prelude::*;
//!
//! // Candidates 2..=81
//! let candidates = candidates(80u32)?;
//!
//! let model = Primes::new().adapter(Batch).build()?;
//! let result = model.filter(&candidates)?;
//!
//! assert_eq!(result.count(), 22);
//! assert_eq!(result.head(5), &[2, 3, 5, 7, 11]);
//! println!("{}", result);
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Strategy:   Sequential
//!   Candidates: 80
//!   Primes:     22
//!   Workers:    1
//!
//! Primes:
//!            2
//!            3
//!          ...
//! ```
//!
//! ### Primality Test
//!
//! The tester is a total function over every primitive integer type:
//!
//! ```rust
//! use primes::prelude::*;
//!
//! assert!(is_prime(97u64));
//! assert!(!is_prime(-7i32));
//! assert!(!is_prime(u8::MAX));
//! ```
//!
//! ### Result and Error Handling
//!
//! `build` and `filter` return `Result<_, PrimesError>`:
//!
//! ```rust
//! use primes::prelude::*;
//!
//! match Primes::<u32>::new().chunk_size(0).adapter(Batch).build() {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e, PrimesError::InvalidChunkSize(0)),
//! }
//! ```
//!
//! ## no_std Support
//!
//! Disable default features to build against `core` + `alloc` only. Logging
//! goes through the `log` facade in both modes.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - the primality test.
mod algorithms;

// Layer 3: Engine - orchestration and execution control.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for prime filtering.
mod api;

// Standard primes prelude.
pub mod prelude {
    pub use crate::api::{
        candidates, is_prime, Adapter::Batch, Collector::LockFree, Collector::Locked,
        PrimeResult, PrimesBuilder as Primes, PrimesError, Strategy,
    };
}

// Internal modules for extension crates and testing.
//
// Extension crates reach the engine hooks through this module.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
