//! # Geoscrub — Spatial outlier filtering for geo-referenced measurements
//!
//! A staged outlier-filtering core for scalar measurements tied to geographic
//! positions, such as harvest yield maps, soil samples, or sensor sweeps.
//!
//! ## How it works
//!
//! Filtering runs in two stages:
//!
//! 1. **Global stage**: the dataset median is computed once and every value
//!    outside a percentage band around it is rejected. This removes gross
//!    errors (sensor dropouts, unit mix-ups) cheaply.
//! 2. **Local stage**: for each survivor, the values of its spatial
//!    neighbors within a metric radius are collected and the point is kept
//!    only if it sits inside a percentage band around the neighborhood
//!    median. This removes locally implausible values that the global band
//!    cannot see.
//!
//! The local stage comes in two flavors:
//!
//! - **Isotropic**: the neighborhood is the full circle around the point.
//! - **Anisotropic**: neighbors are first reduced to a bidirectional wedge
//!   around the locally dominant direction (e.g. the driving direction of a
//!   harvester), so that cross-track values do not distort the comparison
//!   median.
//!
//! Geographic coordinates are projected to planar meters with an
//! equirectangular projection before any distance is measured, and
//! neighborhoods are resolved through a static spatial index, so the whole
//! pipeline runs in O(n log n).
//!
//! ## Quick Start
//!
//! ### Array inputs
//!
//! ```rust
//! use geoscrub::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![0.0; 5];
//! let values = vec![100.0, 101.0, 99.0, 100.0, 250.0];
//!
//! let filter = OutlierFilter::new()
//!     .global_variation(15.0)  // ±15% of the dataset median
//!     .local_variation(10.0)   // ±10% of each neighborhood median
//!     .radius(10.0)            // neighborhood radius in meters
//!     .build()?;
//!
//! let outcome = filter.run_points(&x, &y, &values)?;
//!
//! assert_eq!(outcome.keep, vec![true, true, true, true, false]);
//! assert_eq!(outcome.global_removed, 1);
//! # Result::<(), GeoscrubError>::Ok(())
//! ```
//!
//! ### Record inputs
//!
//! Datasets of records (e.g. parsed CSV rows) are filtered through the same
//! pipeline; coordinate columns are detected from the headers and unusable
//! rows are skipped up front.
//!
//! ```rust
//! use geoscrub::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let headers: Vec<String> = ["Lat", "Lon", "Yield"].map(String::from).to_vec();
//! let rows: Vec<BTreeMap<String, FieldValue>> = (0..6)
//!     .map(|i| {
//!         let mut row = BTreeMap::new();
//!         row.insert("Lat".to_string(), FieldValue::Number(52.0 + i as f64 * 1e-5));
//!         row.insert("Lon".to_string(), FieldValue::Number(13.0));
//!         row.insert("Yield".to_string(), FieldValue::Number(8.0));
//!         row
//!     })
//!     .collect();
//! let dataset = Dataset::from_rows(headers, rows);
//!
//! let filter = OutlierFilter::new().value_column("Yield").build()?;
//! let report = filter.run(&dataset)?;
//!
//! assert_eq!(report.kept.len(), 6);
//! println!("{}", report);
//! # Result::<(), GeoscrubError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have defaults; only deviations need to be set.
//!
//! | Parameter            | Default       | Range        | Description                                 |
//! |----------------------|---------------|--------------|---------------------------------------------|
//! | **value_column**     | `"Yield"`     | header name  | Column holding the measurement values       |
//! | **global_variation** | 20.0          | [0, ∞)       | Global band as % of the dataset median      |
//! | **local_variation**  | 15.0          | [0, ∞)       | Local band as % of the neighborhood median  |
//! | **radius**           | 30.0          | [0, ∞)       | Neighborhood radius in meters               |
//! | **mode**             | `Anisotropic` | 2 modes      | Local filter flavor                         |
//! | **min_neighbours**   | 2             | [1, ∞)       | Neighbor count below which a point is kept  |
//! | **wedge_angle**      | 45.0          | (0, ∞)       | Anisotropic wedge half-angle in degrees     |
//!
//! ## Error Handling
//!
//! Entry points return `Result<_, GeoscrubError>`; the `?` operator is
//! idiomatic:
//!
//! ```rust
//! use geoscrub::prelude::*;
//!
//! // radius must be finite and non-negative
//! let err = OutlierFilter::new().radius(-1.0).build().unwrap_err();
//! assert!(matches!(err, GeoscrubError::InvalidParameter { .. }));
//! ```

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and keep-mask utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the median, descriptive statistics, the equirectangular
// projection, and bearing/direction-histogram helpers.
mod math;

// Layer 3: Spatial - neighborhood resolution.
//
// Contains the static 2D point index and the radius-query neighbor
// gathering built on top of it.
mod spatial;

// Layer 4: Algorithms - the filtering stages.
//
// Contains the global median filter and the isotropic and anisotropic
// local filters.
mod algorithms;

// Layer 5: Engine - orchestration and validation.
//
// Contains parameter validation and the staged pipeline that composes the
// global and local filters.
mod engine;

// Layer 6: Dataset - record-level ingestion.
//
// Contains the record/dataset model, coordinate column detection, and
// extraction of aligned numeric arrays.
mod dataset;

// High-level fluent API for spatial outlier filtering.
//
// Provides the `OutlierFilter` builder for configuring and running the
// pipeline.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard geoscrub prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use geoscrub::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        FilterMode,
        FilterMode::{Anisotropic, Isotropic},
        OutlierFilter, OutlierFilterBuilder, ScrubReport,
    };
    pub use crate::dataset::extract::CoordinateSource;
    pub use crate::dataset::record::{Dataset, FieldValue, Record};
    pub use crate::engine::pipeline::{FilterParams, PipelineOutcome};
    pub use crate::math::stats::StatValues;
    pub use crate::primitives::errors::GeoscrubError;
    pub use crate::primitives::mask::KeepMask;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal spatial index and neighbor gathering.
    pub mod spatial {
        pub use crate::spatial::*;
    }
    /// Internal filtering algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal dataset model and extraction.
    pub mod dataset {
        pub use crate::dataset::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
