//! High-level API for spatial outlier filtering.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a filtering run, and the report type describing
//! its outcome.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for every
//!   parameter; only deviations need to be spelled out.
//! * **Validated**: Ranges are checked once, when `.build()` is called; a
//!   built [`OutlierFilter`] is always runnable.
//! * **Two entry points**: `run` consumes a [`Dataset`] of records and
//!   returns a full report; `run_points` takes pre-extracted arrays for
//!   callers that manage their own record bookkeeping.
//!
//! ## Key concepts
//!
//! * **Configuration flow**: `OutlierFilter::new()` → chained setters →
//!   `.build()` → `.run(&dataset)`.

use std::fmt;

// Internal dependencies
use crate::dataset::extract::{extract_points, CoordinateSource};
use crate::dataset::record::{Dataset, Record};
use crate::engine::pipeline::{run_pipeline, FilterParams, PipelineOutcome};
use crate::engine::validator::Validator;
use crate::math::stats::{describe, StatValues};
use crate::primitives::errors::GeoscrubError;
use crate::primitives::mask::KeepMask;

// Publicly re-exported types
pub use crate::engine::pipeline::FilterMode;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a spatial outlier filtering run.
///
/// Defaults match the parameter surface this core was built for: value
/// column `Yield`, global band 20%, local band 15%, radius 30 m,
/// anisotropic mode, 2 minimum neighbors, 45° wedge.
#[derive(Debug, Clone)]
pub struct OutlierFilterBuilder {
    value_column: Option<String>,
    global_variation_pct: Option<f64>,
    local_variation_pct: Option<f64>,
    radius: Option<f64>,
    mode: Option<FilterMode>,
    min_neighbours: Option<usize>,
    wedge_angle_deg: Option<f64>,
}

impl OutlierFilterBuilder {
    fn new() -> Self {
        Self {
            value_column: None,
            global_variation_pct: None,
            local_variation_pct: None,
            radius: None,
            mode: None,
            min_neighbours: None,
            wedge_angle_deg: None,
        }
    }

    /// Name of the column holding the measurement values.
    pub fn value_column(mut self, column: impl Into<String>) -> Self {
        self.value_column = Some(column.into());
        self
    }

    /// Global acceptance band as a percentage of the dataset median.
    pub fn global_variation(mut self, pct: f64) -> Self {
        self.global_variation_pct = Some(pct);
        self
    }

    /// Local acceptance band as a percentage of the neighborhood median.
    pub fn local_variation(mut self, pct: f64) -> Self {
        self.local_variation_pct = Some(pct);
        self
    }

    /// Neighborhood radius in meters.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Which local filter to run after the global stage.
    pub fn mode(mut self, mode: FilterMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Minimum neighbor count required to judge a point locally.
    pub fn min_neighbours(mut self, count: usize) -> Self {
        self.min_neighbours = Some(count);
        self
    }

    /// Half-angle of the anisotropic wedge in degrees.
    pub fn wedge_angle(mut self, degrees: f64) -> Self {
        self.wedge_angle_deg = Some(degrees);
        self
    }

    /// Validate the configuration and produce a runnable filter.
    pub fn build(self) -> Result<OutlierFilter, GeoscrubError> {
        let params = FilterParams {
            global_variation_pct: self.global_variation_pct.unwrap_or(20.0),
            local_variation_pct: self.local_variation_pct.unwrap_or(15.0),
            radius: self.radius.unwrap_or(30.0),
            mode: self.mode.unwrap_or_default(),
            min_neighbours: self.min_neighbours.unwrap_or(2),
            wedge_angle_deg: self.wedge_angle_deg.unwrap_or(45.0),
        };
        Validator::validate_params(&params)?;

        Ok(OutlierFilter {
            value_column: self.value_column.unwrap_or_else(|| "Yield".to_string()),
            params,
        })
    }
}

// ============================================================================
// Filter
// ============================================================================

/// A validated, runnable outlier filter.
#[derive(Debug, Clone)]
pub struct OutlierFilter {
    value_column: String,
    params: FilterParams<f64>,
}

impl OutlierFilter {
    /// Start configuring a filter.
    pub fn new() -> OutlierFilterBuilder {
        OutlierFilterBuilder::new()
    }

    /// The configured value column.
    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// The resolved parameter set.
    pub fn params(&self) -> &FilterParams<f64> {
        &self.params
    }

    /// Run the full pipeline over a dataset of records.
    ///
    /// Extracts the numeric arrays (skipping unusable rows), computes the
    /// before statistics, runs the staged pipeline, and assembles the
    /// report.
    pub fn run(&self, dataset: &Dataset) -> Result<ScrubReport, GeoscrubError> {
        let extracted = extract_points(dataset, &self.value_column)?;

        let before = describe(&extracted.values);
        let outcome = run_pipeline(
            &extracted.x,
            &extracted.y,
            &extracted.values,
            &self.params,
        );

        let kept: Vec<Record> = outcome
            .kept_positions
            .iter()
            .map(|&i| extracted.records[i].clone())
            .collect();
        let after_values: Vec<f64> = outcome
            .kept_positions
            .iter()
            .map(|&i| extracted.values[i])
            .collect();
        let after = describe(&after_values);

        Ok(ScrubReport {
            kept,
            keep: outcome.keep,
            before,
            after,
            skipped_rows: extracted.skipped,
            global_removed: outcome.global_removed,
            local_removed: outcome.local_removed,
            source: extracted.source,
        })
    }

    /// Run the staged pipeline over pre-extracted aligned arrays.
    pub fn run_points(
        &self,
        x: &[f64],
        y: &[f64],
        values: &[f64],
    ) -> Result<PipelineOutcome, GeoscrubError> {
        Validator::validate_point_set(x, y, values)?;
        Ok(run_pipeline(x, y, values, &self.params))
    }
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a dataset-level filtering run.
#[derive(Debug, Clone)]
pub struct ScrubReport {
    /// Records that survived both stages, ingestion order preserved.
    pub kept: Vec<Record>,
    /// Keep/reject partition over the usable rows, for mapping.
    pub keep: KeepMask,
    /// Statistics over the usable values before filtering.
    pub before: StatValues<f64>,
    /// Statistics over the kept values after filtering.
    pub after: StatValues<f64>,
    /// Rows excluded up front for missing or non-numeric cells.
    pub skipped_rows: usize,
    /// Points removed by the global stage.
    pub global_removed: usize,
    /// Points removed by the local stage.
    pub local_removed: usize,
    /// Which headers supplied the coordinates.
    pub source: CoordinateSource,
}

impl fmt::Display for ScrubReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Usable points: {}", self.keep.len())?;
        writeln!(f, "  Skipped rows:  {}", self.skipped_rows)?;
        writeln!(f, "  Removed:       {} global, {} local", self.global_removed, self.local_removed)?;
        writeln!(f, "  Kept:          {}", self.kept.len())?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:<8} {:>10} {:>10} {:>10} {:>10} {:>8} {:>8}",
            "", "Min", "Max", "Mean", "StdDev", "CV%", "Count"
        )?;
        for (label, s) in [("Before", &self.before), ("After", &self.after)] {
            writeln!(
                f,
                "  {:<8} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>8.2} {:>8}",
                label, s.min, s.max, s.mean, s.std_dev, s.cv, s.count
            )?;
        }
        Ok(())
    }
}
