//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution builders that turn a configured
//! `PrimesBuilder` into a runnable processor.
//!
//! - **Batch**: Filters a complete in-memory candidate sequence
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for in-memory candidate sequences.
pub mod batch;
