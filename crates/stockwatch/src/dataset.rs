//! Hand-authored dataset configurations.
//!
//! Each monitored sheet gets one static configuration: how its rows project
//! into fields, which band scheme applies, and which fields drive the
//! current/reference ratio. Adding a dashboard view means adding a config
//! here, not another copy of the pipeline.

use serde::{Deserialize, Serialize};

use crate::classify::BandSet;
use crate::project::{FieldMapping, FieldSpec};

/// Configuration for one dataset processed by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset name, used for lookup and reporting.
    pub name: String,
    /// How raw rows become records.
    pub mapping: FieldMapping,
    /// Ordered status bands.
    pub bands: BandSet,
    /// Field holding the current stock figure.
    pub current_field: String,
    /// Field holding the reference figure (capacity or pending orders).
    pub reference_field: String,
    /// Field summed into the total-value rollup, when the dataset has one.
    pub value_field: Option<String>,
}

impl DatasetConfig {
    /// Raw-materials summary sheet: contractually fixed column order, with
    /// the stock valuation in column 4 and an alternative valuation parked
    /// out in column 21.
    pub fn raw_materials_summary() -> Self {
        Self {
            name: "raw-materials-summary".to_string(),
            mapping: FieldMapping::Positional(vec![
                FieldSpec::text("item_name", 0),
                FieldSpec::numeric("current_level", 1),
                FieldSpec::numeric("max_level", 2),
                FieldSpec::numeric("in_transit", 3),
                FieldSpec::numeric("stock_value", 4),
                FieldSpec::numeric("alt_value", 21),
            ]),
            bands: BandSet::stock_levels(),
            current_field: "current_level".to_string(),
            reference_field: "max_level".to_string(),
            value_field: Some("stock_value".to_string()),
        }
    }

    /// Raw-materials detail table: columns are whatever the sheet exposes,
    /// so every label passes through verbatim.
    pub fn raw_materials_table() -> Self {
        Self {
            name: "raw-materials-table".to_string(),
            mapping: FieldMapping::LabelPassthrough,
            bands: BandSet::stock_levels(),
            current_field: "Current Level".to_string(),
            reference_field: "Max Level For Color Code".to_string(),
            value_field: None,
        }
    }

    /// Finished-goods summary sheet. Production count and valuation share
    /// column 14 in the source.
    pub fn finished_goods_summary() -> Self {
        Self {
            name: "finished-goods-summary".to_string(),
            mapping: FieldMapping::Positional(vec![
                FieldSpec::text("product_name", 0),
                FieldSpec::numeric("current_stock", 1),
                FieldSpec::numeric("max_capacity", 2),
                FieldSpec::numeric("in_production", 14),
                FieldSpec::numeric("value", 14),
            ]),
            bands: BandSet::stock_levels(),
            current_field: "current_stock".to_string(),
            reference_field: "max_capacity".to_string(),
            value_field: Some("value".to_string()),
        }
    }

    /// Finished-goods movement table: fourteen fixed columns, classified by
    /// stock against pending sales orders rather than capacity.
    pub fn finished_goods_table() -> Self {
        Self {
            name: "finished-goods-table".to_string(),
            mapping: FieldMapping::Positional(vec![
                FieldSpec::text("s_no", 0),
                FieldSpec::text("product_name", 1),
                FieldSpec::numeric("opening", 2),
                FieldSpec::numeric("adjustment", 3),
                FieldSpec::numeric("sales_order_pending", 4),
                FieldSpec::numeric("purchase_material_received", 5),
                FieldSpec::numeric("lift_material", 6),
                FieldSpec::numeric("in_transit", 7),
                FieldSpec::numeric("purchase_return", 8),
                FieldSpec::numeric("production", 9),
                FieldSpec::numeric("sales", 10),
                FieldSpec::numeric("sales_return", 11),
                FieldSpec::numeric("consumption", 12),
                FieldSpec::numeric("current_level", 13),
            ]),
            bands: BandSet::demand_cover(),
            current_field: "current_level".to_string(),
            reference_field: "sales_order_pending".to_string(),
            value_field: None,
        }
    }

    /// Look up a built-in configuration by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "raw-materials-summary" => Some(Self::raw_materials_summary()),
            "raw-materials-table" | "raw-materials" => Some(Self::raw_materials_table()),
            "finished-goods-summary" => Some(Self::finished_goods_summary()),
            "finished-goods-table" | "finished-goods" => Some(Self::finished_goods_table()),
            _ => None,
        }
    }

    /// Names of all built-in configurations.
    pub fn builtin_names() -> &'static [&'static str] {
        &[
            "raw-materials-summary",
            "raw-materials-table",
            "finished-goods-summary",
            "finished-goods-table",
        ]
    }
}
