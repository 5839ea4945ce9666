//! Column schema entry.

use serde::{Deserialize, Serialize};

use super::types::{RenderHint, ValueKind};

/// Inferred display metadata for one projected field.
///
/// The key is the join between schema and data: it always matches the
/// record field name exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Record field name.
    pub key: String,
    /// Human-facing header.
    pub header: String,
    /// Interpreted value kind.
    pub value_kind: ValueKind,
    /// Rendering hint.
    pub render_hint: RenderHint,
}

impl ColumnSpec {
    /// Create a plain text column.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            value_kind: ValueKind::Text,
            render_hint: RenderHint::Plain,
        }
    }

    /// Returns true for the identity column.
    pub fn is_identity(&self) -> bool {
        self.value_kind == ValueKind::Identifier
    }
}
