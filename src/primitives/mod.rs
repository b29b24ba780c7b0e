//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used by every other
//! layer:
//! - The crate-wide error enum
//! - Keep-mask helpers for compacting surviving positions
//!
//! These carry no filtering logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Dataset
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Spatial
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate-wide error types.
pub mod errors;

/// Keep-mask alias and compaction helpers.
pub mod mask;
