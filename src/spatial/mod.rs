//! Layer 3: Spatial
//!
//! # Purpose
//!
//! This layer provides the spatial machinery behind the local filters:
//! - A static kd-tree answering axis-aligned box range queries
//! - Exact radius-neighborhood gathering on top of it
//!
//! The index is built once per filter invocation and is immutable
//! thereafter; the filters assume index stability for the duration of one
//! pipeline run.
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
//! Layer 3: Spatial ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Static 2D kd-tree with box range queries.
pub mod index;

/// Circular neighborhood gathering.
pub mod neighbors;
