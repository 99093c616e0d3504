//! Result collector configuration for extension crates.
//!
//! ## Purpose
//!
//! This module defines the `Collector` enum used by extension crates (like
//! `fastPrimes`) to select the thread-safe container that parallel workers
//! push primes into. The core `primes` crate runs sequentially and never
//! allocates a concurrent container; this is a configuration hint only.
//!
//! ## Design notes
//!
//! * **Extension-focused**: The core sequential pass ignores this setting.
//! * **Per-call**: The selected container is created for one pass and dropped afterwards.
//!
//! ## Key concepts
//!
//! * **LockFree**: Unbounded lock-free queue; workers never block each other.
//! * **Locked**: Mutex-protected vector; workers serialize on insertion.
//!
//! ## Invariants
//!
//! * The default collector is always `LockFree`.

/// Thread-safe result container hint for parallel passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collector {
    /// Lock-free segmented queue.
    #[default]
    LockFree,

    /// Mutex-guarded vector.
    Locked,
}
