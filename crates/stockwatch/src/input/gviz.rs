//! Decoder for the Google Visualization ("gviz") sheet payload.
//!
//! The gviz endpoint returns JSON wrapped in a JS callback, e.g.
//! `/*O_o*/ google.visualization.Query.setResponse({...});`. The decoder
//! slices out the object literal, then reads `table.cols` and `table.rows`
//! into a [`SheetTable`]. Formatted cell values (`cell.f`) are ignored —
//! everything downstream is derived from the raw value.

use serde_json::Value;

use crate::error::{Result, StockwatchError};

use super::cell::{RawCell, RawRow};
use super::table::{ColumnDescriptor, SheetTable};

/// Decode a gviz payload into a table.
///
/// Rows may be absent entirely (an empty sheet); that decodes to a table
/// with descriptors and zero rows, not an error. A payload without
/// `table.cols` is malformed.
pub fn parse_gviz(payload: &str) -> Result<SheetTable> {
    let start = payload.find('{');
    let end = payload.rfind('}');
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => {
            return Err(StockwatchError::MalformedPayload(
                "no JSON object in payload".to_string(),
            ));
        }
    };

    let json: Value = serde_json::from_str(&payload[start..=end])?;
    let table = &json["table"];

    let cols = table["cols"].as_array().ok_or_else(|| {
        StockwatchError::MalformedPayload("payload has no table.cols".to_string())
    })?;

    let descriptors: Vec<ColumnDescriptor> = cols
        .iter()
        .enumerate()
        .map(|(index, col)| {
            let label = match col["label"].as_str() {
                Some(l) if !l.is_empty() => l.to_string(),
                _ => format!("Column {}", index),
            };
            ColumnDescriptor::new(index, label)
        })
        .collect();

    let column_count = descriptors.len();
    let rows: Vec<RawRow> = table["rows"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| decode_row(row, column_count))
                .collect()
        })
        .unwrap_or_default();

    Ok(SheetTable::new(descriptors, rows))
}

/// Decode one gviz row object (`{"c": [{"v": ...}, null, ...]}`).
fn decode_row(row: &Value, column_count: usize) -> RawRow {
    row["c"]
        .as_array()
        .map(|cells| {
            cells
                .iter()
                .take(column_count)
                .map(|cell| match cell {
                    Value::Null => RawCell::Empty,
                    other => RawCell::from_json(&other["v"]),
                })
                .collect()
        })
        .unwrap_or_default()
}
