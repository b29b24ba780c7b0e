//! Static 2D point index with axis-aligned box range queries.
//!
//! ## Purpose
//!
//! Both local filters repeatedly ask "which points lie inside this box?".
//! This module implements a static kd-tree over 2D points that answers that
//! query without scanning the whole set.
//!
//! ## Design notes
//!
//! * **Static construction**: The tree is built once per filter invocation
//!   and never mutated afterwards; there is no insert/update/delete API.
//! * **Eytzinger layout**: Nodes are stored in a left-complete binary tree
//!   array, children reached via arithmetic (2i+1, 2i+2) rather than
//!   pointers, with point data permuted alongside for cache locality.
//! * **Bit-packed traversal**: The iterative search packs (node index, axis)
//!   into a single `usize`; with two dimensions one bit suffices.
//!
//! ## Key concepts
//!
//! * **Splitting plane**: Each node splits the remaining points on the
//!   alternating x/y axis at the median.
//! * **Pruning**: A subtree is skipped when the query box lies entirely on
//!   the other side of its splitting plane.
//!
//! ## Invariants
//!
//! * `search` reports exactly the positions whose point lies inside the
//!   closed query box, in no guaranteed order.
//! * Build is O(n log n); queries are O(√n + k) worst case, far less on the
//!   compact boxes the filters use.
//!
//! ## Non-goals
//!
//! * This module does not support dynamic insertions or deletions.
//! * This module does not verify exact radial distance; callers refine the
//!   box candidates themselves.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Fixed dimensionality of the index.
const DIMS: usize = 2;

// ============================================================================
// Query Buffer
// ============================================================================

/// Reusable scratch space for range queries.
///
/// One buffer is created per filter invocation and recycled across the
/// per-point queries to avoid repeated allocation.
#[derive(Debug, Default)]
pub struct RangeQueryBuffer {
    /// Traversal stack of bit-packed (node, axis) entries.
    pub(crate) stack: Vec<usize>,
    /// Candidate positions produced by the last query.
    pub results: Vec<usize>,
}

impl RangeQueryBuffer {
    /// Create a buffer with traversal capacity for trees of ~1M points.
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(32),
            results: Vec::new(),
        }
    }
}

// ============================================================================
// Point Index
// ============================================================================

/// Static kd-tree over 2D points supporting box range queries.
#[derive(Debug, Clone)]
pub struct PointIndex<T> {
    /// Original point position per Eytzinger slot.
    nodes: Vec<usize>,
    /// Permuted point coordinates, interleaved (x, y), aligned with `nodes`.
    points: Vec<T>,
}

impl<T: Float> PointIndex<T> {
    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Build an index over parallel coordinate arrays.
    ///
    /// Each point degenerates to its own bounding box; `x` and `y` must have
    /// equal length.
    pub fn build(x: &[T], y: &[T]) -> Self {
        debug_assert_eq!(x.len(), y.len(), "coordinate arrays must align");
        let n = x.len();

        let mut order: Vec<usize> = (0..n).collect();
        let mut nodes = vec![0usize; n];
        let mut points = vec![T::zero(); n * DIMS];

        Self::build_recursive(x, y, &mut order, 0, &mut nodes, &mut points, 0);

        Self { nodes, points }
    }

    /// Number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ------------------------------------------------------------------------
    // Range Query
    // ------------------------------------------------------------------------

    /// Collect the positions of all points inside the closed query box.
    ///
    /// Results land in `buffer.results` (cleared first); no ordering is
    /// guaranteed.
    pub fn search(&self, min_x: T, min_y: T, max_x: T, max_y: T, buffer: &mut RangeQueryBuffer) {
        buffer.results.clear();
        buffer.stack.clear();

        let n = self.nodes.len();
        if n == 0 {
            return;
        }

        let mins = [min_x, min_y];
        let maxs = [max_x, max_y];

        // Root: node 0, axis 0. Axis lives in the low bit.
        buffer.stack.push(0);

        while let Some(packed) = buffer.stack.pop() {
            let axis = packed & 1;
            let node_idx = packed >> 1;

            let offset = node_idx * DIMS;
            let px = self.points[offset];
            let py = self.points[offset + 1];

            if px >= min_x && px <= max_x && py >= min_y && py <= max_y {
                buffer.results.push(self.nodes[node_idx]);
            }

            let left_child = 2 * node_idx + 1;
            if left_child >= n {
                continue;
            }

            let split_val = self.points[offset + axis];
            let next_axis = axis ^ 1;
            let right_child = left_child + 1;

            // Left subtree holds coordinates <= split_val on this axis.
            if mins[axis] <= split_val {
                buffer.stack.push((left_child << 1) | next_axis);
            }
            if right_child < n && maxs[axis] >= split_val {
                buffer.stack.push((right_child << 1) | next_axis);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Private Helpers
    // ------------------------------------------------------------------------

    /// Recursively place the median point of `order` at `curr_idx`, keeping
    /// the Eytzinger left-complete layout.
    fn build_recursive(
        x: &[T],
        y: &[T],
        order: &mut [usize],
        depth: usize,
        nodes: &mut [usize],
        points: &mut [T],
        curr_idx: usize,
    ) {
        if order.is_empty() {
            return;
        }

        let axis = depth % DIMS;
        let n = order.len();
        let median_idx = Self::left_subtree_size(n);

        if median_idx < n {
            let coords = if axis == 0 { x } else { y };
            order.select_nth_unstable_by(median_idx, |&a, &b| {
                coords[a].partial_cmp(&coords[b]).unwrap_or(Equal)
            });
        }

        let point_idx = order[median_idx];
        nodes[curr_idx] = point_idx;
        points[curr_idx * DIMS] = x[point_idx];
        points[curr_idx * DIMS + 1] = y[point_idx];

        let (left_part, right_with_median) = order.split_at_mut(median_idx);
        let right_part = &mut right_with_median[1..];

        Self::build_recursive(x, y, left_part, depth + 1, nodes, points, 2 * curr_idx + 1);
        Self::build_recursive(x, y, right_part, depth + 1, nodes, points, 2 * curr_idx + 2);
    }

    /// Number of nodes in the left subtree of a left-complete binary tree of
    /// size n.
    fn left_subtree_size(n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let h = (usize::BITS - n.leading_zeros() - 1) as usize;
        if h == 0 {
            return 0;
        }

        let max_leaf_capacity = 1 << h;
        let nodes_above_leaves = max_leaf_capacity - 1;
        let r = n - nodes_above_leaves;

        let left_leaves = r.min(max_leaf_capacity / 2);
        (max_leaf_capacity / 2) - 1 + left_leaves
    }
}
