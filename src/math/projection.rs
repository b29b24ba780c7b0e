//! Equirectangular projection of geographic coordinates.
//!
//! ## Purpose
//!
//! The spatial filters work in a planar metric frame. This module converts
//! latitude/longitude degree arrays into local planar (x, y) meters so that
//! radii and distances are meaningful.
//!
//! ## Design notes
//!
//! * **Local plane**: The projection centers on the mean latitude of the
//!   whole set; longitudes are scaled by the cosine of that mean latitude.
//! * **Accepted approximation**: Equirectangular projection is only accurate
//!   over geographically small extents, which is exactly the scale of a
//!   single measured field. This is an accepted trade-off, not a bug.
//!
//! ## Invariants
//!
//! * Output arrays have the same length as the inputs.
//! * Empty input produces empty output without error.
//!
//! ## Non-goals
//!
//! * This module does not support large extents, datum conversions, or any
//!   projection other than the equirectangular approximation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GeoscrubError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

// ============================================================================
// Projection
// ============================================================================

/// Project latitude/longitude degree arrays onto a local planar frame.
///
/// Returns `(x, y)` in meters. Fails with
/// [`GeoscrubError::DimensionMismatch`] when the arrays differ in length.
pub fn to_planar<T: Float>(lat: &[T], lon: &[T]) -> Result<(Vec<T>, Vec<T>), GeoscrubError> {
    if lat.len() != lon.len() {
        return Err(GeoscrubError::DimensionMismatch(lat.len(), lon.len()));
    }

    let n = lat.len();
    if n == 0 {
        return Ok((Vec::new(), Vec::new()));
    }

    let radius = T::from(EARTH_RADIUS).unwrap();
    let deg_to_rad = T::from(core::f64::consts::PI / 180.0).unwrap();

    let mean_lat = lat.iter().fold(T::zero(), |acc, &v| acc + v) / T::from(n).unwrap();
    let cos_mean_lat = (mean_lat * deg_to_rad).cos();

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);

    for i in 0..n {
        let lat_rad = lat[i] * deg_to_rad;
        let lon_rad = lon[i] * deg_to_rad;
        x.push(radius * lon_rad * cos_mean_lat);
        y.push(radius * lat_rad);
    }

    Ok((x, y))
}
