//! Schema inference from column descriptors and a sampled record.

use crate::input::ColumnDescriptor;
use crate::project::{FieldKind, FieldMapping, NormalizedRecord};

use super::column::ColumnSpec;
use super::types::{RenderHint, ValueKind};

/// Derive the display schema for one dataset.
///
/// Keys come from the active mapping so that schema and records always
/// join exactly: positional mappings contribute their field names, label
/// pass-through contributes the labels verbatim. The value kind of each
/// column is sampled from the first record; with no records to sample the
/// positional mapping's declared kinds are used, and pass-through columns
/// default to text.
///
/// The first column in declaration order is always the identity column
/// (`ValueKind::Identifier`), regardless of its sampled kind. An empty
/// descriptor list yields an empty schema — "no data" is the caller's
/// rendering concern, not an error.
pub fn infer_schema(
    descriptors: &[ColumnDescriptor],
    mapping: &FieldMapping,
    sample: Option<&NormalizedRecord>,
) -> Vec<ColumnSpec> {
    if descriptors.is_empty() {
        return Vec::new();
    }

    let entries: Vec<(String, String, bool)> = match mapping {
        FieldMapping::Positional(fields) => fields
            .iter()
            .map(|field| {
                let header = descriptors
                    .iter()
                    .find(|d| d.index == field.column)
                    .map(|d| d.label.clone())
                    .unwrap_or_else(|| field.name.clone());
                let numeric = sampled_is_number(sample, &field.name)
                    .unwrap_or(field.kind == FieldKind::Numeric);
                (field.name.clone(), header, numeric)
            })
            .collect(),
        FieldMapping::LabelPassthrough => descriptors
            .iter()
            .map(|d| {
                let numeric = sampled_is_number(sample, &d.label).unwrap_or(false);
                (d.label.clone(), d.label.clone(), numeric)
            })
            .collect(),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(position, (key, header, numeric))| {
            let value_kind = if position == 0 {
                ValueKind::Identifier
            } else if numeric {
                ValueKind::Numeric
            } else {
                ValueKind::Text
            };
            let render_hint = hint_for(&key, position, value_kind);
            ColumnSpec {
                key,
                header,
                value_kind,
                render_hint,
            }
        })
        .collect()
}

fn sampled_is_number(sample: Option<&NormalizedRecord>, key: &str) -> Option<bool> {
    sample
        .and_then(|record| record.get(key))
        .map(|value| value.is_number())
}

/// Rendering heuristic: level/current columns read as progress bars,
/// non-identity text columns as status badges, everything else plain.
fn hint_for(key: &str, position: usize, value_kind: ValueKind) -> RenderHint {
    let lower = key.to_lowercase();
    if lower.contains("level") || lower.contains("current") {
        RenderHint::Progress
    } else if value_kind == ValueKind::Text && position != 0 {
        RenderHint::Status
    } else {
        RenderHint::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{RawCell, SheetTable};
    use crate::project::{project, FieldSpec};

    fn sample_table() -> SheetTable {
        SheetTable::from_labels(
            vec!["Item Name", "Current Level", "Max Level", "Grade"],
            vec![vec![
                RawCell::from("Steel Rods"),
                RawCell::Number(150.0),
                RawCell::Number(200.0),
                RawCell::from("A"),
            ]],
        )
    }

    #[test]
    fn test_passthrough_schema() {
        let table = sample_table();
        let mapping = FieldMapping::LabelPassthrough;
        let records = project(&table, &mapping);
        let schema = infer_schema(&table.descriptors, &mapping, records.first());

        assert_eq!(schema.len(), 4);
        assert_eq!(schema[0].key, "Item Name");
        assert_eq!(schema[0].value_kind, ValueKind::Identifier);
        assert_eq!(schema[1].render_hint, RenderHint::Progress);
        assert_eq!(schema[2].render_hint, RenderHint::Progress);
        assert_eq!(schema[2].value_kind, ValueKind::Numeric);
        assert_eq!(schema[3].value_kind, ValueKind::Text);
        assert_eq!(schema[3].render_hint, RenderHint::Status);
    }

    #[test]
    fn test_positional_schema_joins_on_field_names() {
        let table = sample_table();
        let mapping = FieldMapping::Positional(vec![
            FieldSpec::text("item_name", 0),
            FieldSpec::numeric("current_level", 1),
            FieldSpec::numeric("max_level", 2),
        ]);
        let records = project(&table, &mapping);
        let schema = infer_schema(&table.descriptors, &mapping, records.first());

        assert_eq!(schema[0].key, "item_name");
        assert_eq!(schema[0].header, "Item Name");
        assert!(schema[0].is_identity());
        assert_eq!(schema[1].key, "current_level");
        assert_eq!(schema[1].render_hint, RenderHint::Progress);
        assert_eq!(schema[1].value_kind, ValueKind::Numeric);
    }

    #[test]
    fn test_no_sample_falls_back_to_declared_kinds() {
        let table = sample_table();
        let mapping = FieldMapping::Positional(vec![
            FieldSpec::text("item_name", 0),
            FieldSpec::numeric("stock_value", 5),
        ]);
        let schema = infer_schema(&table.descriptors, &mapping, None);

        assert_eq!(schema[1].value_kind, ValueKind::Numeric);
        // Column 5 has no descriptor; header falls back to the field name.
        assert_eq!(schema[1].header, "stock_value");
    }

    #[test]
    fn test_empty_descriptors_empty_schema() {
        let schema = infer_schema(&[], &FieldMapping::LabelPassthrough, None);
        assert!(schema.is_empty());
    }
}
