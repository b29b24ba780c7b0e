//! Descriptive statistics for before/after reporting.
//!
//! ## Purpose
//!
//! This module computes the summary statistics shown alongside a filtering
//! run: count, min, max, mean, sample standard deviation, and coefficient of
//! variation. They report the effect of the pipeline; they play no part in
//! the keep/reject decisions themselves.
//!
//! ## Design notes
//!
//! * **Two passes**: One pass for sum/min/max, one for squared deviations.
//!   Numerically adequate for the dataset sizes this crate targets.
//! * **Sample variance**: Divides by n - 1; a single value has zero spread.
//!
//! ## Invariants
//!
//! * `std_dev = 0` when n <= 1.
//! * `cv = 0` when the mean is exactly zero (rather than a division blowup).
//! * Empty input yields the all-zero record with `count = 0`.

// External dependencies
use num_traits::Float;

// ============================================================================
// StatValues
// ============================================================================

/// Summary statistics over a value sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatValues<T> {
    /// Smallest value.
    pub min: T,
    /// Largest value.
    pub max: T,
    /// Arithmetic mean.
    pub mean: T,
    /// Sample standard deviation (n - 1 denominator; 0 when n <= 1).
    pub std_dev: T,
    /// Coefficient of variation as a percentage: std_dev / |mean| * 100.
    pub cv: T,
    /// Number of values.
    pub count: usize,
}

impl<T: Float> StatValues<T> {
    /// The all-zero record returned for empty input.
    pub fn empty() -> Self {
        Self {
            min: T::zero(),
            max: T::zero(),
            mean: T::zero(),
            std_dev: T::zero(),
            cv: T::zero(),
            count: 0,
        }
    }
}

// ============================================================================
// Computation
// ============================================================================

/// Compute [`StatValues`] over a value sequence.
pub fn describe<T: Float>(values: &[T]) -> StatValues<T> {
    let n = values.len();
    if n == 0 {
        return StatValues::empty();
    }

    let mut sum = T::zero();
    let mut min = T::infinity();
    let mut max = T::neg_infinity();

    for &value in values {
        sum = sum + value;
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    let count_t = T::from(n).unwrap();
    let mean = sum / count_t;

    let mut sum_sq = T::zero();
    for &value in values {
        let diff = value - mean;
        sum_sq = sum_sq + diff * diff;
    }

    let std_dev = if n > 1 {
        (sum_sq / T::from(n - 1).unwrap()).sqrt()
    } else {
        T::zero()
    };

    let cv = if mean != T::zero() {
        std_dev / mean.abs() * T::from(100.0).unwrap()
    } else {
        T::zero()
    };

    StatValues {
        min,
        max,
        mean,
        std_dev,
        cv,
        count: n,
    }
}
