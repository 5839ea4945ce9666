//! Raw cell values as delivered by the tabular source.

use serde_json::Value;

/// A single unprocessed cell from the external tabular source.
///
/// Cells carry no type guarantee — a "numeric" column may deliver
/// `Text("₹75,000")` one row and `Number(75000.0)` the next. Type is
/// interpreted downstream by the normalizer, never declared here.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawCell {
    /// Absent or null cell.
    #[default]
    Empty,
    /// A numeric value from the source.
    Number(f64),
    /// A textual value, possibly locale-formatted.
    Text(String),
    /// A boolean value.
    Bool(bool),
}

/// One unprocessed row: an ordered sequence of cells.
///
/// Rows may be shorter than the column list; missing positions are treated
/// as [`RawCell::Empty`] by the projector.
pub type RawRow = Vec<RawCell>;

impl RawCell {
    /// Build a cell from a JSON value (the gviz `cell.v` field).
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => RawCell::Empty,
            Value::Number(n) => n.as_f64().map(RawCell::Number).unwrap_or(RawCell::Empty),
            Value::String(s) => RawCell::Text(s.clone()),
            Value::Bool(b) => RawCell::Bool(*b),
            // Arrays/objects never appear in sheet cells; treat as absent.
            _ => RawCell::Empty,
        }
    }

    /// Returns true if the cell is absent.
    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

impl From<f64> for RawCell {
    fn from(n: f64) -> Self {
        RawCell::Number(n)
    }
}
