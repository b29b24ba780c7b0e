//! Angular utilities for directional neighbor analysis.
//!
//! ## Purpose
//!
//! The anisotropic filter reasons about the bearings from a point to its
//! neighbors: it estimates the locally dominant direction with a smoothed
//! circular histogram and then restricts the neighborhood to a wedge around
//! that direction. This module holds the angle arithmetic and the histogram.
//!
//! ## Design notes
//!
//! * **Fixed binning**: Twelve 30-degree sectors cover [0, 2π). The bin count
//!   is a structural constant of the direction estimator, not a tunable.
//! * **Circular smoothing**: Each bearing adds full weight to its own bin and
//!   0.3 to both adjacent bins, wrapping at the 0/2π boundary, so a direction
//!   straddling a bin edge is not undercounted.
//! * **First maximum wins**: Bin ties resolve to the lowest bin index, which
//!   keeps the estimate deterministic.
//!
//! ## Invariants
//!
//! * `normalize_bearing` always lands in [0, 2π).
//! * `signed_difference` always lands in [-π, π].
//! * The dominant direction of a non-degenerate set is a bin center.
//!
//! ## Non-goals
//!
//! * This module does not gather neighbors or apply the wedge test; that is
//!   the anisotropic filter's job.

// External dependencies
use num_traits::Float;

/// Number of sectors in the direction histogram.
pub const DIRECTION_BINS: usize = 12;

/// Smoothing weight added to the two bins adjacent to a bearing's own bin.
const ADJACENT_WEIGHT: f64 = 0.3;

// ============================================================================
// Angle Arithmetic
// ============================================================================

/// Normalize a bearing into [0, 2π).
#[inline]
pub fn normalize_bearing<T: Float>(angle: T) -> T {
    let two_pi = T::from(core::f64::consts::TAU).unwrap();
    let mut a = angle;
    while a < T::zero() {
        a = a + two_pi;
    }
    while a >= two_pi {
        a = a - two_pi;
    }
    a
}

/// Signed difference between two angles, normalized into [-π, π].
///
/// Handles wraparound, so the difference between 350° and 10° is -20°, not
/// 340°.
#[inline]
pub fn signed_difference<T: Float>(a: T, b: T) -> T {
    let pi = T::from(core::f64::consts::PI).unwrap();
    let two_pi = T::from(core::f64::consts::TAU).unwrap();
    let mut diff = a - b;
    while diff > pi {
        diff = diff - two_pi;
    }
    while diff < -pi {
        diff = diff + two_pi;
    }
    diff
}

// ============================================================================
// Direction Histogram
// ============================================================================

/// Smoothed circular histogram over [`DIRECTION_BINS`] fixed sectors.
#[derive(Debug, Clone)]
pub struct DirectionHistogram<T> {
    bins: [T; DIRECTION_BINS],
}

impl<T: Float> DirectionHistogram<T> {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            bins: [T::zero(); DIRECTION_BINS],
        }
    }

    /// Angular width of one sector.
    #[inline]
    pub fn bin_size() -> T {
        T::from(core::f64::consts::TAU).unwrap() / T::from(DIRECTION_BINS).unwrap()
    }

    /// Accumulate one bearing: weight 1 to its own bin, 0.3 to each adjacent
    /// bin, wrapping at the 0/2π boundary.
    pub fn add(&mut self, bearing: T) {
        let normalized = normalize_bearing(bearing);
        let bin = (normalized / Self::bin_size())
            .to_usize()
            .unwrap_or(0)
            .min(DIRECTION_BINS - 1);

        let left = (bin + DIRECTION_BINS - 1) % DIRECTION_BINS;
        let right = (bin + 1) % DIRECTION_BINS;

        let adjacent = T::from(ADJACENT_WEIGHT).unwrap();
        self.bins[bin] = self.bins[bin] + T::one();
        self.bins[left] = self.bins[left] + adjacent;
        self.bins[right] = self.bins[right] + adjacent;
    }

    /// Center angle of the maximally weighted bin (first maximum wins).
    pub fn dominant_bin_center(&self) -> T {
        let mut max_weight = T::zero();
        let mut dominant = 0;
        for (i, &weight) in self.bins.iter().enumerate() {
            if weight > max_weight {
                max_weight = weight;
                dominant = i;
            }
        }
        (T::from(dominant).unwrap() + T::from(0.5).unwrap()) * Self::bin_size()
    }
}

impl<T: Float> Default for DirectionHistogram<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate the dominant direction of a set of neighbor bearings.
///
/// Degenerate sets short-circuit: an empty set yields 0 and a single bearing
/// is returned verbatim rather than snapped to a bin center.
pub fn dominant_direction<T: Float>(bearings: &[T]) -> T {
    match bearings.len() {
        0 => T::zero(),
        1 => bearings[0],
        _ => {
            let mut histogram = DirectionHistogram::new();
            for &bearing in bearings {
                histogram.add(bearing);
            }
            histogram.dominant_bin_center()
        }
    }
}
