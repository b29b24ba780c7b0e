//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! filtering pipeline:
//! - Exact median computation
//! - Descriptive statistics for before/after reporting
//! - Equirectangular projection of geographic coordinates
//! - Angular utilities (bearing normalization, direction histogram)
//!
//! These are reusable building blocks with no filter-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exact median of a numeric sequence.
pub mod median;

/// Descriptive statistics (count, min, max, mean, stdDev, CV).
pub mod stats;

/// Equirectangular lat/lon to planar meters projection.
pub mod projection;

/// Bearing arithmetic and the smoothed direction histogram.
pub mod angles;
