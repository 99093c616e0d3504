//! # fastPrimes: Parallel Prime Filtering
//!
//! Extends the `primes` crate with a parallel fan-out/collect filter pass.
//! Candidates are split into chunks, tested on a `rayon` worker pool, and
//! the primes are gathered into one concurrent container created for that
//! call. The sequential pass stays available for comparison.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastPrimes::prelude::*;
//!
//! let candidates = candidates(80u64)?;
//!
//! // Parallel by default
//! let model = Primes::new().adapter(Batch).build()?;
//! let result = model.filter(&candidates)?;
//!
//! assert_eq!(result.count(), 22);
//! # #[cfg(feature = "cpu")]
//! assert_eq!(result.strategy, Strategy::Parallel);
//!
//! // Parallel output is unordered; sort for display
//! assert_eq!(result.sorted_below(12), vec![2, 3, 5, 7, 11]);
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use fastPrimes::prelude::*;
//!
//! let candidates = candidates(10_000u32)?;
//!
//! let model = Primes::new()
//!     .threads(4)           // Dedicated 4-thread pool
//!     .chunk_size(256)      // Candidates per work unit
//!     .collector(Locked)    // Mutex-protected result vector
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.filter(&candidates)?;
//! assert_eq!(result.count(), 1_229);
//! # #[cfg(feature = "cpu")]
//! assert_eq!(result.workers, 4);
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ### Sequential Fallback
//!
//! ```rust
//! use fastPrimes::prelude::*;
//!
//! let candidates = candidates(30i32)?;
//! let result = Primes::new()
//!     .adapter(Batch)
//!     .parallel(false)
//!     .build()?
//!     .filter(&candidates)?;
//!
//! assert_eq!(result.primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31]);
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! ```rust
//! use fastPrimes::prelude::*;
//! use ndarray::Array1;
//!
//! let candidates = Array1::from_vec((2u32..=101).collect());
//! let result = Primes::new().adapter(Batch).build()?.filter(&candidates)?;
//!
//! assert_eq!(result.count(), 26);
//! # Result::<(), PrimesError>::Ok(())
//! ```
//!
//! ## Failure Policy
//!
//! A panic raised while testing any chunk is propagated to the caller once
//! the pool has joined. A pass never returns a partial result.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 3: Engine - parallel execution.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for prime filtering.
mod api;

// Input data handling.
mod input;

/// Timing and strategy reports.
pub mod report;

// Standard fastPrimes prelude.
pub mod prelude {
    pub use crate::api::{
        candidates, is_prime,
        Adapter::Batch,
        Collector::{LockFree, Locked},
        PrimeResult, PrimesBuilder as Primes, PrimesError, Strategy,
    };
}

// Internal modules for development and testing.
#[doc(hidden)]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
