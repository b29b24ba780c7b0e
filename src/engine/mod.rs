//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the filtering stages:
//! - Parameter and point-set validation
//! - The staged pipeline (global filter → compaction → local filter)
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Dataset
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Spatial
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter and input validation.
pub mod validator;

/// The staged filtering pipeline.
pub mod pipeline;
