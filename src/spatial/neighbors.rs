//! Radius-neighborhood gathering on top of the point index.
//!
//! ## Purpose
//!
//! The index answers box queries; the filters need true circular
//! neighborhoods. This module refines box candidates by exact squared
//! distance and records the displacement to each surviving neighbor, which
//! the anisotropic filter turns into a bearing.
//!
//! ## Design notes
//!
//! * **Self-exclusion**: The query point never appears in its own
//!   neighborhood.
//! * **Squared comparison**: Candidates are kept when d² <= r², avoiding a
//!   square root per candidate.
//! * **Buffer recycling**: One [`NeighborBuffer`] serves all points of a
//!   filter invocation; vectors are cleared, never shrunk.
//!
//! ## Invariants
//!
//! * The gathered set is the exact closed-disk neighborhood of the query
//!   point, independent of the order the index reports candidates.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::spatial::index::{PointIndex, RangeQueryBuffer};

// ============================================================================
// Neighbor
// ============================================================================

/// One spatial neighbor of a query point.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<T> {
    /// Position of the neighbor in the filtered point set.
    pub position: usize,
    /// Displacement from the query point along x.
    pub dx: T,
    /// Displacement from the query point along y.
    pub dy: T,
    /// Measurement value at the neighbor.
    pub value: T,
}

impl<T: Float> Neighbor<T> {
    /// Bearing from the query point to this neighbor.
    #[inline]
    pub fn bearing(&self) -> T {
        self.dy.atan2(self.dx)
    }
}

// ============================================================================
// Neighbor Buffer
// ============================================================================

/// Reusable scratch space for neighborhood gathering.
#[derive(Debug, Default)]
pub struct NeighborBuffer<T> {
    /// Box-query scratch.
    pub query: RangeQueryBuffer,
    /// Neighbors surviving the exact distance check.
    pub neighbors: Vec<Neighbor<T>>,
    /// Neighbor values handed to the median (reused per point).
    pub values: Vec<T>,
}

impl<T: Float> NeighborBuffer<T> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            query: RangeQueryBuffer::new(),
            neighbors: Vec::new(),
            values: Vec::new(),
        }
    }
}

// ============================================================================
// Gathering
// ============================================================================

/// Gather the closed-disk neighborhood of point `i` into `buffer.neighbors`.
///
/// Queries the index over the square `[x±r, y±r]`, then keeps candidates
/// (excluding `i` itself) whose true squared Euclidean distance is at most
/// `radius²`.
pub fn gather_neighbors<T: Float>(
    index: &PointIndex<T>,
    x: &[T],
    y: &[T],
    values: &[T],
    i: usize,
    radius: T,
    buffer: &mut NeighborBuffer<T>,
) {
    buffer.neighbors.clear();

    let radius_sq = radius * radius;
    index.search(
        x[i] - radius,
        y[i] - radius,
        x[i] + radius,
        y[i] + radius,
        &mut buffer.query,
    );

    for &j in &buffer.query.results {
        if j == i {
            continue;
        }

        let dx = x[j] - x[i];
        let dy = y[j] - y[i];
        let dist_sq = dx * dx + dy * dy;

        if dist_sq <= radius_sq {
            buffer.neighbors.push(Neighbor {
                position: j,
                dx,
                dy,
                value: values[j],
            });
        }
    }
}
