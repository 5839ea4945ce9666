//! Sheet table abstraction and source provenance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::cell::{RawCell, RawRow};

/// Identity of one source column.
///
/// The index is stable for the lifetime of one fetch. The label is the only
/// human-facing identity and is not guaranteed unique or non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Zero-based position in the source table.
    pub index: usize,
    /// Header label as delivered by the source.
    pub label: String,
}

impl ColumnDescriptor {
    /// Create a descriptor for the given position.
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

/// Metadata about the payload a table was decoded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Where the payload came from (file path or sheet URL).
    pub origin: String,
    /// SHA-256 hash of the payload bytes.
    pub hash: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the payload was read.
    pub fetched_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a payload that has been decoded.
    pub fn new(origin: impl Into<String>, payload: &[u8], row_count: usize, column_count: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(payload);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            origin: origin.into(),
            hash,
            row_count,
            column_count,
            fetched_at: Utc::now(),
        }
    }
}

/// One fetched tabular payload: labeled columns plus untyped rows.
///
/// Produced once per fetch cycle and treated as immutable; every derived
/// artifact (records, schema, tallies) is recomputed from it.
#[derive(Debug, Clone)]
pub struct SheetTable {
    /// Column identities in source order.
    pub descriptors: Vec<ColumnDescriptor>,
    /// Row data in source order.
    pub rows: Vec<RawRow>,
    /// Provenance of the payload, when known.
    pub source: Option<SourceMetadata>,
}

impl SheetTable {
    /// Create a new table.
    pub fn new(descriptors: Vec<ColumnDescriptor>, rows: Vec<RawRow>) -> Self {
        Self {
            descriptors,
            rows,
            source: None,
        }
    }

    /// Build descriptors from plain header labels.
    pub fn from_labels<S: Into<String>>(labels: Vec<S>, rows: Vec<RawRow>) -> Self {
        let descriptors = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| ColumnDescriptor::new(index, label))
            .collect();
        Self::new(descriptors, rows)
    }

    /// Attach source provenance.
    pub fn with_source(mut self, source: SourceMetadata) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.descriptors.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell, `None` when the row is short or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&RawCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Header labels in source order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.label.as_str())
    }
}
