//! Exact median of a numeric sequence.
//!
//! ## Purpose
//!
//! Every filter in this crate derives its acceptance bounds from a median:
//! the global filter from the dataset-wide median, the local filters from the
//! median of a point's neighborhood. This module provides that one function.
//!
//! ## Design notes
//!
//! * **Copy-then-sort**: The input slice is copied and sorted ascending, so
//!   the caller's sequence is never mutated. O(n log n).
//! * **Empty convention**: An empty sequence yields zero rather than an
//!   error; the filters treat "no evidence" cases separately before calling.
//!
//! ## Invariants
//!
//! * Even length → arithmetic mean of the two central elements.
//! * Odd length → the central element exactly.
//! * The caller's slice is untouched.
//!
//! ## Non-goals
//!
//! * This module does not screen non-finite values (NaN/Inf); those are the
//!   caller's concern. The sort treats incomparable values as equal, so a
//!   NaN in the input yields an unspecified but non-panicking result.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Median
// ============================================================================

/// Compute the exact median of a sequence.
///
/// Returns zero for an empty input.
pub fn median<T: Float>(values: &[T]) -> T {
    let n = values.len();
    if n == 0 {
        return T::zero();
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / T::from(2.0).unwrap()
    } else {
        sorted[mid]
    }
}
