//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer contains the three sibling filters of the pipeline:
//! - Global median filter (dataset-wide band)
//! - Isotropic local filter (circular neighborhood band)
//! - Anisotropic local filter (directional wedge neighborhood band)
//!
//! All three are plain functions over arrays producing keep-masks; they
//! share the median utilities from the math layer and the spatial index from
//! the spatial layer.
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
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Spatial
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Shared local-filter parameters and the median-band test.
pub mod local;

/// Dataset-wide median filter.
pub mod global;

/// Circular-neighborhood local filter.
pub mod isotropic;

/// Directional-wedge local filter.
pub mod anisotropic;
