//! Numeric extraction and coordinate resolution.
//!
//! ## Purpose
//!
//! This module turns a [`Dataset`] into the aligned numeric arrays the
//! pipeline consumes: the value array from the chosen column and planar
//! (x, y) coordinates, either projected from geographic lat/lon columns or
//! taken directly from planar X/Y columns.
//!
//! ## Design notes
//!
//! * **Column detection**: The latitude column is the first header whose
//!   lowercase form starts with `lat`; longitude likewise with `lon` (which
//!   also covers `long`). Failing that, headers equal to `X` and `Y`
//!   (case-insensitive) are used as planar coordinates directly.
//! * **Row screening**: Rows whose value or coordinate cells are missing or
//!   non-numeric are silently excluded before filtering. The exclusion count
//!   is reported and logged, but it never aborts processing.
//!
//! ## Invariants
//!
//! * The returned arrays are aligned: one entry per retained record.
//! * Record identifiers survive extraction unchanged.
//!
//! ## Non-goals
//!
//! * This module does not parse files; rows arrive already typed.
//! * This module does not validate filter parameters.

// Internal dependencies
use crate::dataset::record::{Dataset, Record};
use crate::math::projection::to_planar;
use crate::primitives::errors::GeoscrubError;

// ============================================================================
// Coordinate Source
// ============================================================================

/// Which header pair supplied the coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateSource {
    /// Geographic columns projected through the equirectangular projection.
    Geographic {
        /// Header used for latitude.
        lat: String,
        /// Header used for longitude.
        lon: String,
    },
    /// Planar columns used verbatim.
    Planar {
        /// Header used for x.
        x: String,
        /// Header used for y.
        y: String,
    },
}

// ============================================================================
// Extracted Points
// ============================================================================

/// A dataset reduced to aligned numeric arrays.
#[derive(Debug, Clone)]
pub struct ExtractedPoints {
    /// Retained records, ingestion order preserved.
    pub records: Vec<Record>,
    /// Planar x in meters, aligned with `records`.
    pub x: Vec<f64>,
    /// Planar y in meters, aligned with `records`.
    pub y: Vec<f64>,
    /// Measurement values, aligned with `records`.
    pub values: Vec<f64>,
    /// Rows excluded for missing or non-numeric cells.
    pub skipped: usize,
    /// Which headers supplied the coordinates.
    pub source: CoordinateSource,
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract aligned numeric arrays from a dataset.
///
/// Fails with [`GeoscrubError::UnknownColumn`] when `value_column` is not a
/// declared header, [`GeoscrubError::NoNumericValues`] when the column holds
/// zero numeric cells, and [`GeoscrubError::MissingCoordinates`] when
/// neither a lat/lon nor an X/Y header pair exists.
pub fn extract_points(
    dataset: &Dataset,
    value_column: &str,
) -> Result<ExtractedPoints, GeoscrubError> {
    if !dataset.headers.iter().any(|h| h == value_column) {
        return Err(GeoscrubError::UnknownColumn(value_column.to_string()));
    }

    // Screen on the value column first; its absence is an error, coordinate
    // gaps are not.
    let numeric_rows: Vec<&Record> = dataset
        .records
        .iter()
        .filter(|record| record.numeric(value_column).is_some())
        .collect();

    let value_skipped = dataset.records.len() - numeric_rows.len();
    if value_skipped > 0 {
        log::warn!(
            "excluded {} rows with missing or non-numeric '{}' values",
            value_skipped,
            value_column
        );
    }
    if numeric_rows.is_empty() {
        return Err(GeoscrubError::NoNumericValues(value_column.to_string()));
    }

    let source = resolve_coordinates(&dataset.headers)?;

    // Rows with unusable coordinate cells are excluded the same way; the
    // numeric cells are collected in the same screening pass.
    let (coord_a, coord_b) = match &source {
        CoordinateSource::Geographic { lat, lon } => (lat.as_str(), lon.as_str()),
        CoordinateSource::Planar { x, y } => (x.as_str(), y.as_str()),
    };

    let mut records = Vec::new();
    let mut first_coord = Vec::new();
    let mut second_coord = Vec::new();
    let mut values = Vec::new();

    for record in numeric_rows {
        let (Some(a), Some(b), Some(v)) = (
            record.numeric(coord_a),
            record.numeric(coord_b),
            record.numeric(value_column),
        ) else {
            continue;
        };
        records.push(record.clone());
        first_coord.push(a);
        second_coord.push(b);
        values.push(v);
    }

    let coord_skipped = dataset.records.len() - value_skipped - records.len();
    if coord_skipped > 0 {
        log::warn!(
            "excluded {} rows with missing or non-numeric coordinates",
            coord_skipped
        );
    }

    let (x, y) = match &source {
        CoordinateSource::Geographic { .. } => to_planar(&first_coord, &second_coord)?,
        CoordinateSource::Planar { .. } => (first_coord, second_coord),
    };

    Ok(ExtractedPoints {
        records,
        x,
        y,
        values,
        skipped: value_skipped + coord_skipped,
        source,
    })
}

/// Resolve the coordinate header pair.
///
/// Geographic columns take precedence over planar ones, matching the
/// behavior of the ingestion surface this core was built for.
fn resolve_coordinates(headers: &[String]) -> Result<CoordinateSource, GeoscrubError> {
    let lat = headers
        .iter()
        .find(|h| h.to_lowercase().starts_with("lat"));
    let lon = headers
        .iter()
        .find(|h| h.to_lowercase().starts_with("lon"));

    if let (Some(lat), Some(lon)) = (lat, lon) {
        return Ok(CoordinateSource::Geographic {
            lat: lat.clone(),
            lon: lon.clone(),
        });
    }

    let x = headers.iter().find(|h| h.eq_ignore_ascii_case("x"));
    let y = headers.iter().find(|h| h.eq_ignore_ascii_case("y"));

    if let (Some(x), Some(y)) = (x, y) {
        return Ok(CoordinateSource::Planar {
            x: x.clone(),
            y: y.clone(),
        });
    }

    Err(GeoscrubError::MissingCoordinates)
}
