//! Error types for the geoscrub filtering pipeline.
//!
//! ## Purpose
//!
//! This module defines the crate-wide error enum returned by every fallible
//! operation: coordinate projection, dataset extraction, and parameter
//! validation.
//!
//! ## Design notes
//!
//! * **Single enum**: One flat error type keeps the `?` chains short and the
//!   caller-side matching exhaustive.
//! * **Caller errors only**: Every variant describes a configuration or data
//!   problem scoped to a single invocation. There are no transient faults and
//!   nothing is retried.
//!
//! ## Key concepts
//!
//! * **Synchronous reporting**: Errors surface immediately from the call that
//!   detected them; the pipeline never partially applies a stage.
//!
//! ## Non-goals
//!
//! * This module does not represent per-row anomalies (missing or non-numeric
//!   cells). Those are skipped and counted, not raised.

use thiserror::Error;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced by geoscrub operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoscrubError {
    /// Aligned coordinate arrays have different lengths.
    #[error("coordinate arrays differ in length ({0} vs {1})")]
    DimensionMismatch(usize, usize),

    /// Neither a lat/lon pair nor an X/Y pair was found among the headers.
    #[error("no coordinate columns found (expected lat/lon or X/Y headers)")]
    MissingCoordinates,

    /// The chosen value column is not present in the dataset headers.
    #[error("value column '{0}' not found in the dataset headers")]
    UnknownColumn(String),

    /// The chosen value column exists but holds zero usable numeric entries.
    #[error("no numeric values found in column '{0}'")]
    NoNumericValues(String),

    /// A filter parameter is outside its documented range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
