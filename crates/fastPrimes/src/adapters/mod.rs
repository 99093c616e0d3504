//! Layer 4: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! parallel execution:
//!
//! - **Batch**: Unified adapter for parallel/sequential execution

// Unified batch adapter for prime filtering.
pub mod batch;
