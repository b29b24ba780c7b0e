//! Keep-mask primitives shared by every filtering stage.
//!
//! ## Purpose
//!
//! Each filter stage produces one boolean per input position, `true` meaning
//! the position survives. This module holds the alias and the small helpers
//! the pipeline uses to compact surviving positions between stages.
//!
//! ## Invariants
//!
//! * A mask always has exactly one entry per input position.
//! * Helpers never reorder positions; surviving indices stay ascending.

/// Boolean sequence marking which input positions survive a filtering stage.
pub type KeepMask = Vec<bool>;

/// Indices of the positions a mask keeps, in ascending order.
pub fn kept_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
        .collect()
}

/// Number of `true` entries in a mask.
pub fn count_kept(mask: &[bool]) -> usize {
    mask.iter().filter(|&&keep| keep).count()
}

/// Gather the values at `indices` from `source` into a new vector.
///
/// Used by the pipeline to compact the point set to the globally surviving
/// subset before local filtering.
pub fn gather<T: Copy>(source: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| source[i]).collect()
}
