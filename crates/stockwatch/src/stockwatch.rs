//! Main pipeline entry point and report types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::{aggregate_by_band, BandTally};
use crate::dataset::DatasetConfig;
use crate::input::{SheetTable, SourceMetadata};
use crate::project::{project, NormalizedRecord};
use crate::schema::{infer_schema, ColumnSpec};
use crate::search;
use crate::summary;

/// Everything the render layer needs for one dataset: schema, records,
/// band distribution, and headline rollups. Raw numeric values throughout;
/// formatting is the renderer's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Dataset name from the configuration.
    pub dataset: String,
    /// Provenance of the processed payload, when known.
    pub source: Option<SourceMetadata>,
    /// Inferred display schema.
    pub schema: Vec<ColumnSpec>,
    /// Normalized records in source order.
    pub records: Vec<NormalizedRecord>,
    /// Per-band counts and shares, in band order.
    pub distribution: IndexMap<String, BandTally>,
    /// Headline figures.
    pub summary: StockSummary,
}

impl DatasetReport {
    /// Returns true when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Headline rollups for the stat cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSummary {
    /// Total records after blank-row filtering.
    pub total_items: usize,
    /// Records in the lowest band.
    pub critical_items: usize,
    /// Sum of the configured value field, when one is configured.
    pub total_value: Option<f64>,
}

/// The stock pipeline for one configured dataset.
///
/// Pure over its input: processing the same table twice yields identical
/// reports, and independent datasets share no state.
pub struct Stockwatch {
    config: DatasetConfig,
}

impl Stockwatch {
    /// Create a pipeline for the given dataset configuration.
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Run the full pipeline over a fetched table.
    ///
    /// Degenerate input (no columns, no rows, all rows blank) produces an
    /// empty report — a valid terminal state the renderer shows as
    /// "no data", not an error.
    pub fn process(&self, table: &SheetTable) -> DatasetReport {
        let records = project(table, &self.config.mapping);
        self.build_report(table, records)
    }

    /// Run the pipeline, then filter records by a free-text query.
    ///
    /// The distribution and summary describe the full record set; only the
    /// rendered records are narrowed, matching how the dashboard search
    /// boxes behave.
    pub fn process_with_query(&self, table: &SheetTable, query: &str) -> DatasetReport {
        let mut report = self.process(table);
        report.records = search::search(&report.records, query);
        report
    }

    fn build_report(&self, table: &SheetTable, records: Vec<NormalizedRecord>) -> DatasetReport {
        let schema = infer_schema(&table.descriptors, &self.config.mapping, records.first());
        let distribution = aggregate_by_band(
            &records,
            &self.config.current_field,
            &self.config.reference_field,
            &self.config.bands,
        );

        let critical_items = distribution
            .get(&self.config.bands.first().name)
            .map(|tally| tally.count)
            .unwrap_or(0);
        let total_value = self
            .config
            .value_field
            .as_deref()
            .map(|field| summary::sum(&records, field));

        let summary = StockSummary {
            total_items: records.len(),
            critical_items,
            total_value,
        };

        DatasetReport {
            dataset: self.config.name.clone(),
            source: table.source.clone(),
            schema,
            records,
            distribution,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawCell;

    fn material_table() -> SheetTable {
        let labels = vec![
            "Item Name",
            "Current Level",
            "Max Level For Color Code",
            "In Transit",
            "Value of Stock",
        ];
        SheetTable::from_labels(
            labels,
            vec![
                vec![
                    RawCell::from("Steel Rods"),
                    RawCell::Number(150.0),
                    RawCell::Number(200.0),
                    RawCell::Number(50.0),
                    RawCell::from("₹75,000"),
                ],
                vec![
                    RawCell::from("Plastic Pellets"),
                    RawCell::Number(60.0),
                    RawCell::Number(200.0),
                    RawCell::Number(100.0),
                    RawCell::from("₹25,000"),
                ],
                vec![
                    RawCell::from("Rubber Gaskets"),
                    RawCell::Number(300.0),
                    RawCell::Number(250.0),
                    RawCell::Number(0.0),
                    RawCell::from("₹15,000"),
                ],
                vec![RawCell::from("  "), RawCell::Number(1.0)],
            ],
        )
    }

    #[test]
    fn test_process_full_pipeline() {
        let pipeline = Stockwatch::new(DatasetConfig::raw_materials_summary());
        let report = pipeline.process(&material_table());

        assert_eq!(report.dataset, "raw-materials-summary");
        assert_eq!(report.summary.total_items, 3);
        // Steel 75% -> Good, Plastic 30% -> Critical, Rubber 120% -> Excess.
        assert_eq!(report.summary.critical_items, 1);
        assert_eq!(report.distribution["Good"].count, 1);
        assert_eq!(report.distribution["Excess"].count, 1);
        assert_eq!(report.summary.total_value, Some(115000.0));
    }

    #[test]
    fn test_schema_joins_records() {
        let pipeline = Stockwatch::new(DatasetConfig::raw_materials_summary());
        let report = pipeline.process(&material_table());

        for col in &report.schema {
            assert!(
                report.records[0].contains_key(&col.key),
                "schema key '{}' missing from records",
                col.key
            );
        }
    }

    #[test]
    fn test_process_with_query_narrows_records_only() {
        let pipeline = Stockwatch::new(DatasetConfig::raw_materials_summary());
        let report = pipeline.process_with_query(&material_table(), "steel");

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.summary.total_items, 3);
    }

    #[test]
    fn test_empty_table_is_valid_terminal_state() {
        let pipeline = Stockwatch::new(DatasetConfig::raw_materials_table());
        let report = pipeline.process(&SheetTable::from_labels(Vec::<String>::new(), vec![]));

        assert!(report.is_empty());
        assert!(report.schema.is_empty());
        assert_eq!(report.summary.total_items, 0);
        assert_eq!(report.summary.critical_items, 0);
        for tally in report.distribution.values() {
            assert_eq!(tally.percent_of_total, 0.0);
        }
    }

    #[test]
    fn test_report_serializes() {
        let pipeline = Stockwatch::new(DatasetConfig::raw_materials_summary());
        let report = pipeline.process(&material_table());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"Critical\""));
        assert!(json.contains("\"item_name\""));
    }
}
