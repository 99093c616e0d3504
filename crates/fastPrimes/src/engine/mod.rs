//! Layer 3: Engine
//!
//! This layer provides the parallel execution engine for prime filtering.
//! It distributes candidate chunks across CPU cores and gathers the primes
//! into a per-call concurrent sink.

// Parallel execution engine using CPU threads
pub mod executor;

// Concurrent result containers
pub mod sink;
