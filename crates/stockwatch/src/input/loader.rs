//! File loading for saved sheet snapshots.
//!
//! Two snapshot formats are supported: plain CSV exports (header row first)
//! and saved gviz payloads. On the CSV path every cell is text; numeric
//! coercion is owned entirely by the normalizer.

use std::fs;
use std::path::Path;

use crate::error::{Result, StockwatchError};

use super::cell::{RawCell, RawRow};
use super::gviz::parse_gviz;
use super::table::{SheetTable, SourceMetadata};

/// Load a snapshot file, sniffing the format from its contents.
///
/// A payload that opens with a JS comment or a JSON object is decoded as
/// gviz; anything else is read as CSV.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<SheetTable> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|e| StockwatchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = String::from_utf8_lossy(&contents);
    let table = if looks_like_gviz(&text) {
        parse_gviz(&text)?
    } else {
        parse_csv(&contents)?
    };

    let (rows, cols) = (table.row_count(), table.column_count());
    Ok(table.with_source(SourceMetadata::new(
        path.display().to_string(),
        &contents,
        rows,
        cols,
    )))
}

fn looks_like_gviz(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with("/*") || trimmed.starts_with('{') || trimmed.starts_with("google.")
}

/// Parse CSV bytes: header row becomes the descriptors, body rows become
/// text cells (empty cells stay absent).
fn parse_csv(bytes: &[u8]) -> Result<SheetTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let labels: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if labels.is_empty() {
        return Err(StockwatchError::EmptyData("no columns found".to_string()));
    }

    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|s| {
                    if s.is_empty() {
                        RawCell::Empty
                    } else {
                        RawCell::Text(s.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(SheetTable::from_labels(labels, rows))
}
