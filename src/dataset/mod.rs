//! Layer 6: Dataset
//!
//! # Purpose
//!
//! This layer models the ingestion boundary:
//! - Dynamically typed records with stable identifiers
//! - Value-column extraction and coordinate resolution into the aligned
//!   numeric arrays the pipeline consumes
//!
//! File parsing itself is a collaborator's concern; rows arrive here
//! already typed.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Dataset ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Spatial
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Record, field-value, and dataset types.
pub mod record;

/// Numeric extraction and coordinate resolution.
pub mod extract;
