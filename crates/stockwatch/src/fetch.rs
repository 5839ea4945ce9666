//! Live sheet fetch over the gviz endpoint.
//!
//! One blocking GET per call, no retry, no caching: an upstream failure is
//! reported as [`StockwatchError::Fetch`] with the transport's own message
//! and nothing else. Retry policy belongs to whoever drives the fetch.

use crate::error::{Result, StockwatchError};
use crate::input::{parse_gviz, SheetTable, SourceMetadata};

/// Fetch one sheet tab and decode it.
pub fn fetch_sheet(sheet_id: &str, sheet_name: &str) -> Result<SheetTable> {
    let url = format!("https://docs.google.com/spreadsheets/d/{}/gviz/tq", sheet_id);

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(&url)
        .query(&[("tqx", "out:json"), ("sheet", sheet_name)])
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| StockwatchError::Fetch(e.to_string()))?;

    let origin = response.url().to_string();
    let payload = response
        .text()
        .map_err(|e| StockwatchError::Fetch(e.to_string()))?;

    let table = parse_gviz(&payload)?;
    let (rows, cols) = (table.row_count(), table.column_count());
    Ok(table.with_source(SourceMetadata::new(origin, payload.as_bytes(), rows, cols)))
}
