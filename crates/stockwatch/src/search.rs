//! Free-text filtering over normalized records.

use crate::project::NormalizedRecord;

/// Filter records by a case-insensitive substring query across all fields.
///
/// Numbers are matched against their plain decimal string form. The empty
/// query is the identity — all records, same order. Linear in
/// records × fields per call, which is fine at spreadsheet scale; revisit
/// before pointing this at anything unbounded.
pub fn search(records: &[NormalizedRecord], query: &str) -> Vec<NormalizedRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .values()
                .any(|value| value.to_text().to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
