//! Pipeline orchestrator: global filter, compaction, local filter.
//!
//! ## Purpose
//!
//! This module sequences the filtering stages over a point set: the global
//! median filter runs over the full value array, the survivors are compacted
//! into a dense subset, and the selected local filter runs over that subset
//! only. The final keep-mask over the original positions is the composition
//! of both stages.
//!
//! ## Design notes
//!
//! * **Sequential, not independent**: Local neighbor searches only ever see
//!   points that survived the global stage. A globally removed point can
//!   never serve as a neighbor, and its removal is permanent regardless of
//!   any local outcome.
//! * **Narrowing only**: Stages never mutate values; they only narrow the
//!   set of surviving positions.
//!
//! ## Invariants
//!
//! * `keep.len()` equals the input length; `keep[i]` is true iff position i
//!   survived both stages.
//! * An empty globally surviving subset short-circuits to an all-false mask.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not compute statistics (the caller reports those).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::anisotropic::anisotropic_filter;
use crate::algorithms::global::global_filter;
use crate::algorithms::isotropic::isotropic_filter;
use crate::algorithms::local::LocalParams;
use crate::primitives::mask::{gather, kept_indices, KeepMask};

// ============================================================================
// Filter Mode
// ============================================================================

/// Which local filter the pipeline runs after the global stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Circular neighborhood, direction-blind.
    Isotropic,

    /// Directional wedge neighborhood. The default for measurement patterns
    /// laid down in passes, which is what this core was built for.
    #[default]
    Anisotropic,
}

// ============================================================================
// Filter Parameters
// ============================================================================

/// Resolved parameter set for one pipeline invocation.
#[derive(Debug, Clone, Copy)]
pub struct FilterParams<T> {
    /// Global acceptance band as a percentage of the dataset median.
    pub global_variation_pct: T,
    /// Local acceptance band as a percentage of the neighborhood median.
    pub local_variation_pct: T,
    /// Neighborhood radius in meters.
    pub radius: T,
    /// Which local filter to run.
    pub mode: FilterMode,
    /// Minimum neighbor count required to judge a point locally.
    pub min_neighbours: usize,
    /// Half-angle of the anisotropic wedge in degrees.
    pub wedge_angle_deg: T,
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of one pipeline run over a point set.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Combined keep-mask over the original input positions.
    pub keep: KeepMask,
    /// Original positions that survived both stages, ascending.
    pub kept_positions: Vec<usize>,
    /// Positions removed by the global stage.
    pub global_removed: usize,
    /// Positions removed by the local stage.
    pub local_removed: usize,
}

// ============================================================================
// Orchestration
// ============================================================================

/// Run the staged pipeline over an aligned point set.
///
/// The arrays must already be aligned (`x.len() == y.len() == values.len()`);
/// the public API validates this before calling.
pub fn run_pipeline<T: Float>(
    x: &[T],
    y: &[T],
    values: &[T],
    params: &FilterParams<T>,
) -> PipelineOutcome {
    let n = values.len();

    // Stage 1: global median band over the full value array.
    let global_mask = global_filter(values, params.global_variation_pct);
    let survivors = kept_indices(&global_mask);
    let global_removed = n - survivors.len();
    log::debug!(
        "global filter kept {} of {} points",
        survivors.len(),
        n
    );

    if survivors.is_empty() {
        return PipelineOutcome {
            keep: vec![false; n],
            kept_positions: Vec::new(),
            global_removed,
            local_removed: 0,
        };
    }

    // Stage 2: compact to the surviving subset, remembering the mapping back
    // to original positions.
    let sub_x = gather(x, &survivors);
    let sub_y = gather(y, &survivors);
    let sub_values = gather(values, &survivors);

    let local_params = LocalParams {
        radius: params.radius,
        variation_pct: params.local_variation_pct,
        min_neighbours: params.min_neighbours,
    };

    // Stage 3: selected local filter over the compacted subset only.
    let local_mask = match params.mode {
        FilterMode::Isotropic => isotropic_filter(&sub_x, &sub_y, &sub_values, &local_params),
        FilterMode::Anisotropic => anisotropic_filter(
            &sub_x,
            &sub_y,
            &sub_values,
            &local_params,
            params.wedge_angle_deg,
        ),
    };

    // Stage 4: fold the local verdicts back onto the original positions.
    let mut keep = vec![false; n];
    let mut kept_positions = Vec::new();
    for (sub_pos, &orig_pos) in survivors.iter().enumerate() {
        if local_mask[sub_pos] {
            keep[orig_pos] = true;
            kept_positions.push(orig_pos);
        }
    }

    let local_removed = survivors.len() - kept_positions.len();
    log::debug!(
        "local filter ({:?}) kept {} of {} survivors",
        params.mode,
        kept_positions.len(),
        survivors.len()
    );

    PipelineOutcome {
        keep,
        kept_positions,
        global_removed,
        local_removed,
    }
}
