//! Anisotropic local median filter with directional wedges.
//!
//! ## Purpose
//!
//! Measurements taken along passes (harvester rows, survey lines) correlate
//! far more strongly along the travel direction than across it. This stage
//! estimates each point's locally dominant direction from its neighbors'
//! bearings and judges the point against the median of only the neighbors
//! lying within a wedge of that direction or its opposite.
//!
//! ## Design notes
//!
//! * **Per-point direction**: The dominant direction is estimated
//!   independently for every point from true spatial geometry, so the result
//!   does not depend on input traversal order.
//! * **Bidirectional wedge**: The wedge accepts both the dominant direction
//!   and the direction 180° away; a pass is a line, not a ray.
//! * **Graceful fallback**: When the wedge restriction leaves too few
//!   neighbors, the filter falls back to the full spatial neighbor set
//!   instead of refusing to judge the point.
//!
//! ## Invariants
//!
//! * A point with fewer than `min(min_neighbours, 2)` spatial neighbors is
//!   kept outright.
//! * The wedge fallback evaluates against the full neighbor median; it is
//!   not an auto-keep.
//! * An empty final neighbor set keeps the point.
//!
//! ## Non-goals
//!
//! * This module does not estimate a single field-wide direction; direction
//!   is local to each point.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::local::{within_median_band, LocalParams};
use crate::math::angles::{dominant_direction, signed_difference};
use crate::math::median::median;
use crate::primitives::mask::KeepMask;
use crate::spatial::index::PointIndex;
use crate::spatial::neighbors::{gather_neighbors, NeighborBuffer};

// ============================================================================
// Anisotropic Filter
// ============================================================================

/// Keep the points whose value sits within the band around their
/// directionally dominant neighborhood median.
///
/// `wedge_angle_deg` is the half-angle of the acceptance wedge around the
/// dominant direction (and its opposite), in degrees.
pub fn anisotropic_filter<T: Float>(
    x: &[T],
    y: &[T],
    values: &[T],
    params: &LocalParams<T>,
    wedge_angle_deg: T,
) -> KeepMask {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let variation = params.variation_pct / T::from(100.0).unwrap();
    let wedge = wedge_angle_deg * T::from(core::f64::consts::PI / 180.0).unwrap();
    let pi = T::from(core::f64::consts::PI).unwrap();
    let min_required = params.min_neighbours.min(2);

    let index = PointIndex::build(x, y);
    let mut buffer = NeighborBuffer::new();
    let mut bearings: Vec<T> = Vec::new();
    let mut mask = vec![false; n];

    for i in 0..n {
        gather_neighbors(&index, x, y, values, i, params.radius, &mut buffer);

        if buffer.neighbors.len() < min_required {
            mask[i] = true;
            continue;
        }

        bearings.clear();
        bearings.extend(buffer.neighbors.iter().map(|nb| nb.bearing()));
        let dominant = dominant_direction(&bearings);

        // A neighbor counts when its bearing lies within the wedge of the
        // dominant direction or of the opposite direction (a full line).
        buffer.values.clear();
        for (nb, &bearing) in buffer.neighbors.iter().zip(bearings.iter()) {
            let along = signed_difference(bearing, dominant).abs();
            let against = signed_difference(bearing, dominant + pi).abs();
            if along <= wedge || against <= wedge {
                buffer.values.push(nb.value);
            }
        }

        // Wedge too restrictive: judge against the full spatial set instead.
        if buffer.values.len() < min_required {
            buffer.values.clear();
            buffer
                .values
                .extend(buffer.neighbors.iter().map(|nb| nb.value));
        }

        if buffer.values.is_empty() {
            mask[i] = true;
            continue;
        }

        let local_median = median(&buffer.values);
        mask[i] = within_median_band(values[i], local_median, variation);
    }

    mask
}
