//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer runs filter passes. It coordinates the primality algorithm
//! with the configured execution strategy and packages the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for filter passes.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for filter passes.
pub mod output;
