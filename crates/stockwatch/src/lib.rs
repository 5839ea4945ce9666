//! Stockwatch: normalization and classification for spreadsheet-backed
//! inventory data.
//!
//! Sheet payloads arrive loosely typed — arbitrary column order, missing
//! cells, locale-formatted numbers. Stockwatch turns them into a uniform
//! record set, derives stock-health metrics, classifies every record into a
//! status band, and infers a renderable column schema, all through one
//! parameterized pipeline.
//!
//! # Core Principles
//!
//! - **Total over messy input**: a bad cell becomes a safe default, never
//!   an error.
//! - **Pure derivation**: records, schema, and tallies are recomputed from
//!   the immutable payload; nothing is mutated after construction.
//! - **Configured, not duplicated**: each dataset supplies a field mapping
//!   and a band scheme; the pipeline itself is shared.
//!
//! # Example
//!
//! ```no_run
//! use stockwatch::{DatasetConfig, Stockwatch};
//!
//! let table = stockwatch::input::load_snapshot("raw_materials.csv").unwrap();
//! let pipeline = Stockwatch::new(DatasetConfig::raw_materials_summary());
//! let report = pipeline.process(&table);
//!
//! println!("items: {}", report.summary.total_items);
//! println!("critical: {}", report.summary.critical_items);
//! ```

pub mod classify;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod input;
pub mod normalize;
pub mod project;
pub mod schema;
pub mod search;
pub mod summary;

mod stockwatch;

pub use crate::stockwatch::{DatasetReport, StockSummary, Stockwatch};
pub use classify::{aggregate_by_band, stock_ratio_pct, BandSet, BandTally, StatusBand};
pub use dataset::DatasetConfig;
pub use error::{Result, StockwatchError};
pub use input::{ColumnDescriptor, RawCell, RawRow, SheetTable, SourceMetadata};
pub use project::{project, FieldKind, FieldMapping, FieldSpec, FieldValue, NormalizedRecord};
pub use schema::{infer_schema, ColumnSpec, RenderHint, ValueKind};
pub use search::search;
