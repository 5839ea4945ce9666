//! Scalar normalization: the single source of truth for cell coercion.
//!
//! Spreadsheet data is expected to be messy — thousands separators, currency
//! symbols, stray unit suffixes, blank cells. Failing a whole dataset over
//! one bad cell is worse than substituting a safe default, so both
//! operations here are total: they never raise and never produce NaN or an
//! infinity.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::RawCell;

// Everything that is not a digit, a decimal point, or a minus sign.
static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());

/// Coerce a raw cell to a finite number.
///
/// Absent cells become 0. Numbers pass through unchanged. Strings are
/// stripped of every non-numeric character and parsed as a decimal; any
/// residue that does not parse to a finite number (nothing left, multiple
/// decimal points, stray minus signs) becomes 0.
pub fn numeric(cell: &RawCell) -> f64 {
    match cell {
        RawCell::Empty | RawCell::Bool(_) => 0.0,
        RawCell::Number(n) if n.is_finite() => *n,
        RawCell::Number(_) => 0.0,
        RawCell::Text(s) => numeric_str(s),
    }
}

/// The strip-then-parse policy behind [`numeric`], for values that are
/// already strings.
pub fn numeric_str(s: &str) -> f64 {
    let stripped = NON_NUMERIC.replace_all(s, "");
    match stripped.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Coerce a raw cell to trimmed text.
///
/// Absent cells become the empty string; numbers render in plain decimal
/// form with no locale grouping.
pub fn text(cell: &RawCell) -> String {
    match cell {
        RawCell::Empty => String::new(),
        RawCell::Text(s) => s.trim().to_string(),
        RawCell::Number(n) => n.to_string(),
        RawCell::Bool(b) => b.to_string(),
    }
}
