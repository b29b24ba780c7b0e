//! Input validation for filter parameters and point sets.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before a pipeline
//! invocation. It checks parameter ranges and the alignment of the
//! coordinate/value arrays.
//!
//! ## Design notes
//!
//! * **Fail-fast**: Validation stops at the first violation.
//! * **Caller errors**: Every failure here is a configuration or data error
//!   scoped to the invocation; nothing is retried or corrected.
//!
//! ## Invariants
//!
//! * Validated parameters satisfy their documented ranges.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter data.
//! * This module does not screen individual non-numeric cells; the dataset
//!   layer excludes those before arrays are built.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::pipeline::FilterParams;
use crate::primitives::errors::GeoscrubError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter parameters and input arrays.
///
/// All methods return `Result<(), GeoscrubError>` and fail fast on the first
/// violation.
pub struct Validator;

impl Validator {
    /// Validate a full parameter set.
    pub fn validate_params<T: Float>(params: &FilterParams<T>) -> Result<(), GeoscrubError> {
        Self::validate_percentage(params.global_variation_pct, "global_variation_pct")?;
        Self::validate_percentage(params.local_variation_pct, "local_variation_pct")?;
        Self::validate_radius(params.radius)?;
        Self::validate_min_neighbours(params.min_neighbours)?;
        Self::validate_wedge_angle(params.wedge_angle_deg)?;
        Ok(())
    }

    /// Validate that the coordinate and value arrays are aligned.
    pub fn validate_point_set<T: Float>(
        x: &[T],
        y: &[T],
        values: &[T],
    ) -> Result<(), GeoscrubError> {
        if x.len() != y.len() {
            return Err(GeoscrubError::DimensionMismatch(x.len(), y.len()));
        }
        if x.len() != values.len() {
            return Err(GeoscrubError::DimensionMismatch(x.len(), values.len()));
        }
        Ok(())
    }

    /// Validate a variation percentage (finite, non-negative).
    pub fn validate_percentage<T: Float>(pct: T, name: &'static str) -> Result<(), GeoscrubError> {
        if !pct.is_finite() || pct < T::zero() {
            return Err(GeoscrubError::InvalidParameter {
                name,
                value: pct.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the neighborhood radius (finite, non-negative meters).
    pub fn validate_radius<T: Float>(radius: T) -> Result<(), GeoscrubError> {
        if !radius.is_finite() || radius < T::zero() {
            return Err(GeoscrubError::InvalidParameter {
                name: "radius",
                value: radius.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the minimum neighbor count (at least 1).
    pub fn validate_min_neighbours(min_neighbours: usize) -> Result<(), GeoscrubError> {
        if min_neighbours < 1 {
            return Err(GeoscrubError::InvalidParameter {
                name: "min_neighbours",
                value: min_neighbours as f64,
            });
        }
        Ok(())
    }

    /// Validate the wedge half-angle (finite, strictly positive degrees).
    pub fn validate_wedge_angle<T: Float>(angle_deg: T) -> Result<(), GeoscrubError> {
        if !angle_deg.is_finite() || angle_deg <= T::zero() {
            return Err(GeoscrubError::InvalidParameter {
                name: "wedge_angle_deg",
                value: angle_deg.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}
