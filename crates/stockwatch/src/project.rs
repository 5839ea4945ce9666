//! Record projection: raw rows into uniformly typed records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::{RawCell, SheetTable};
use crate::normalize;

/// Declared kind of a mapped field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Coerced through the numeric normalizer.
    Numeric,
    /// Coerced through the text normalizer.
    Text,
}

/// One field of a positional mapping: a name bound to a source column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name in the projected record.
    pub name: String,
    /// Source column index.
    pub column: usize,
    /// Declared kind.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a numeric field.
    pub fn numeric(name: impl Into<String>, column: usize) -> Self {
        Self {
            name: name.into(),
            column,
            kind: FieldKind::Numeric,
        }
    }

    /// Declare a text field.
    pub fn text(name: impl Into<String>, column: usize) -> Self {
        Self {
            name: name.into(),
            column,
            kind: FieldKind::Text,
        }
    }
}

/// Per-dataset rule for turning a raw row into named fields.
///
/// Exactly one mode is active per dataset. Positional mapping is used when
/// the source's column order is contractually fixed; label pass-through when
/// its columns are unpredictable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMapping {
    /// Explicit name-to-column pairs in declaration order.
    Positional(Vec<FieldSpec>),
    /// Every column label becomes a field name verbatim, kind inferred
    /// per value.
    LabelPassthrough,
}

impl FieldMapping {
    /// The identity field: first declared field, or the first column label
    /// under pass-through. `None` only when there is nothing to project.
    pub fn identity_field(&self, table: &SheetTable) -> Option<String> {
        match self {
            FieldMapping::Positional(fields) => fields.first().map(|f| f.name.clone()),
            FieldMapping::LabelPassthrough => {
                table.descriptors.first().map(|d| d.label.clone())
            }
        }
    }
}

/// A projected field value: a finite number or a string, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value, `None` for text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// Returns true for numeric values.
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Number(_))
    }

    /// Numeric coercion: numbers pass through, text routes through the
    /// shared strip-then-parse normalizer.
    pub fn coerce_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => normalize::numeric_str(s),
        }
    }

    /// Plain decimal string form, no locale grouping.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// A record after coercion and identity filtering.
///
/// Field order follows declaration order; every declared field is present
/// in every record.
pub type NormalizedRecord = IndexMap<String, FieldValue>;

/// Project raw rows into normalized records.
///
/// Rows whose identity field normalizes to empty text are dropped — they
/// are blank spreadsheet rows, not entities. Short rows are padded with
/// defaults (0 for numeric fields, `""` for text). Input order is
/// preserved; downstream "top N" views depend on it.
pub fn project(table: &SheetTable, mapping: &FieldMapping) -> Vec<NormalizedRecord> {
    let identity = match mapping.identity_field(table) {
        Some(name) => name,
        None => return Vec::new(),
    };

    table
        .rows
        .iter()
        .map(|row| match mapping {
            FieldMapping::Positional(fields) => {
                let mut record = NormalizedRecord::with_capacity(fields.len());
                for field in fields {
                    let cell = row.get(field.column).cloned().unwrap_or_default();
                    let value = match field.kind {
                        FieldKind::Numeric => FieldValue::Number(normalize::numeric(&cell)),
                        FieldKind::Text => FieldValue::Text(normalize::text(&cell)),
                    };
                    record.insert(field.name.clone(), value);
                }
                record
            }
            FieldMapping::LabelPassthrough => {
                let mut record = NormalizedRecord::with_capacity(table.descriptors.len());
                for descriptor in &table.descriptors {
                    let cell = row.get(descriptor.index).cloned().unwrap_or_default();
                    let value = match cell {
                        RawCell::Number(n) if n.is_finite() => FieldValue::Number(n),
                        other => FieldValue::Text(normalize::text(&other)),
                    };
                    record.insert(descriptor.label.clone(), value);
                }
                record
            }
        })
        .filter(|record| {
            record
                .get(&identity)
                .map(|v| !v.to_text().trim().is_empty())
                .unwrap_or(false)
        })
        .collect()
}
