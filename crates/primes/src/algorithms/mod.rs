//! Layer 2: Algorithms
//!
//! This layer implements the per-candidate logic that the engine applies
//! across a candidate sequence.

// Trial-division primality test.
pub mod primality;
