//! Record and field-value model at the ingestion boundary.
//!
//! ## Purpose
//!
//! The core never parses files; an ingestion collaborator hands it rows of
//! named fields. This module models those rows: a dynamically typed cell
//! value, a record with a stable identifier, and the dataset wrapper that
//! carries the authoritative header list.
//!
//! ## Design notes
//!
//! * **Opaque rows**: The core only ever reads records through extracted
//!   numeric values; everything else passes through untouched so the caller
//!   gets back the same record shape it put in.
//! * **Stable identifiers**: Each record carries the id assigned at
//!   ingestion, so keep/reject partitions can be mapped back to origin rows.
//! * **Headers are authoritative**: Column existence is judged against the
//!   declared header list, not against whichever fields happen to be present
//!   on individual rows.

use std::collections::BTreeMap;

// ============================================================================
// FieldValue
// ============================================================================

/// A dynamically typed cell in a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A numeric cell.
    Number(f64),
    /// A textual cell.
    Text(String),
    /// A missing or empty cell.
    Null,
}

impl FieldValue {
    /// The numeric content of the cell, if it has any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// One row of origin data plus its stable identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identifier assigned at ingestion; stable across filtering.
    pub id: usize,
    /// Named fields of the row.
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Create a record from its id and fields.
    pub fn new(id: usize, fields: BTreeMap<String, FieldValue>) -> Self {
        Self { id, fields }
    }

    /// Numeric content of the named field, if present and numeric.
    pub fn numeric(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(FieldValue::as_number)
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// A batch of records plus the declared header list.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names as declared by the ingestion collaborator.
    pub headers: Vec<String>,
    /// The rows, ids assigned in ingestion order.
    pub records: Vec<Record>,
}

impl Dataset {
    /// Wrap headers and records into a dataset.
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    /// Build a dataset from raw field maps, assigning ids in order.
    pub fn from_rows(headers: Vec<String>, rows: Vec<BTreeMap<String, FieldValue>>) -> Self {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(id, fields)| Record::new(id, fields))
            .collect();
        Self { headers, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
