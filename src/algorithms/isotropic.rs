//! Isotropic local median filter.
//!
//! ## Purpose
//!
//! The direction-blind local stage: each point is judged against the median
//! of its full circular neighborhood. Points without enough neighbors are
//! auto-kept, since there is no evidence to reject them on.
//!
//! ## Design notes
//!
//! * **Index per invocation**: The spatial index is built once over the
//!   input set and queried read-only for every point.
//! * **Order independence**: The neighbor set and its median do not depend
//!   on the order the index reports candidates, so the result is independent
//!   of input traversal order.
//!
//! ## Invariants
//!
//! * A point with fewer than `min_neighbours` neighbors is always kept.
//! * `radius = 0` gives every point zero neighbors, so everything is kept
//!   regardless of the variation setting.
//! * The point's own value never participates in its local median.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::local::{within_median_band, LocalParams};
use crate::math::median::median;
use crate::primitives::mask::KeepMask;
use crate::spatial::index::PointIndex;
use crate::spatial::neighbors::{gather_neighbors, NeighborBuffer};

// ============================================================================
// Isotropic Filter
// ============================================================================

/// Keep the points whose value sits within the band around their circular
/// neighborhood median.
pub fn isotropic_filter<T: Float>(
    x: &[T],
    y: &[T],
    values: &[T],
    params: &LocalParams<T>,
) -> KeepMask {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let variation = params.variation_pct / T::from(100.0).unwrap();
    let index = PointIndex::build(x, y);
    let mut buffer = NeighborBuffer::new();
    let mut mask = vec![false; n];

    for i in 0..n {
        gather_neighbors(&index, x, y, values, i, params.radius, &mut buffer);

        if buffer.neighbors.len() < params.min_neighbours {
            // Too few neighbors to judge the point; keep it.
            mask[i] = true;
            continue;
        }

        buffer.values.clear();
        buffer
            .values
            .extend(buffer.neighbors.iter().map(|nb| nb.value));
        let local_median = median(&buffer.values);

        mask[i] = within_median_band(values[i], local_median, variation);
    }

    mask
}
