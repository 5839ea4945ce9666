//! Core type tags for the display schema.

use serde::{Deserialize, Serialize};

/// Interpreted kind of a projected field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Finite numeric values.
    Numeric,
    /// Free text values.
    Text,
    /// The identity column (first in declaration order, full-width display).
    Identifier,
}

impl ValueKind {
    /// Returns true if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Numeric)
    }
}

/// How the render layer should present a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderHint {
    /// Plain value cell.
    Plain,
    /// Progress-bar style (stock level against a reference).
    Progress,
    /// Status-badge style.
    Status,
}
