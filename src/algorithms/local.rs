//! Shared pieces of the two local filters.
//!
//! ## Purpose
//!
//! The isotropic and anisotropic filters share their parameter set and the
//! median-bounds acceptance test. This module holds both so the filters stay
//! plain sibling functions.
//!
//! ## Key concepts
//!
//! * **Variation as a fraction of the median**: A `variation_pct` of 10 means
//!   the acceptance band is `median ± 10% of the median`, not 10% of full
//!   scale.
//!
//! ## Invariants
//!
//! * The bounds are evaluated literally as
//!   `value >= m - m·v && value <= m + m·v`. A negative median silently
//!   inverts the band (rejecting everything for v > 0) and a zero median
//!   collapses it to zero tolerance. Both behaviors are preserved on purpose
//!   and pinned by regression tests; do not "fix" them here.

// External dependencies
use num_traits::Float;

// ============================================================================
// Local Filter Parameters
// ============================================================================

/// Parameters shared by the isotropic and anisotropic local filters.
#[derive(Debug, Clone, Copy)]
pub struct LocalParams<T> {
    /// Neighborhood radius in meters.
    pub radius: T,
    /// Acceptance band as a percentage of the local median.
    pub variation_pct: T,
    /// Minimum neighbor count required to judge a point.
    pub min_neighbours: usize,
}

// ============================================================================
// Acceptance Test
// ============================================================================

/// Whether `value` lies within the closed band `median ± median·variation`.
///
/// `variation` is the decimal coefficient (percentage already divided by
/// 100).
#[inline]
pub fn within_median_band<T: Float>(value: T, median: T, variation: T) -> bool {
    let lower = median - median * variation;
    let upper = median + median * variation;
    value >= lower && value <= upper
}
