//! Global median filter.
//!
//! ## Purpose
//!
//! The first pipeline stage: remove values far from the dataset-wide median
//! before any spatial reasoning happens. This clears gross outliers cheaply
//! and keeps them from contaminating local neighborhood medians later.
//!
//! ## Design notes
//!
//! * **One median, one pass**: The dataset median is computed once and every
//!   value is tested against the same closed band.
//! * **Empty input**: Produces an empty mask rather than an error; there is
//!   simply nothing to judge.
//!
//! ## Invariants
//!
//! * The mask has exactly one entry per input value.
//! * `variation_pct = 0` keeps exactly the positions equal to the median.
//! * The negative-median band inversion of [`within_median_band`] applies
//!   here unchanged.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::local::within_median_band;
use crate::math::median::median;
use crate::primitives::mask::KeepMask;

// ============================================================================
// Global Filter
// ============================================================================

/// Keep the values within `variation_pct` percent of the dataset median.
pub fn global_filter<T: Float>(values: &[T], variation_pct: T) -> KeepMask {
    if values.is_empty() {
        return Vec::new();
    }

    let variation = variation_pct / T::from(100.0).unwrap();
    let dataset_median = median(values);

    values
        .iter()
        .map(|&value| within_median_band(value, dataset_median, variation))
        .collect()
}
