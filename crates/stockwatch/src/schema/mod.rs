//! Schema types for representing inferred display structure.

mod column;
mod infer;
mod types;

pub use column::ColumnSpec;
pub use infer::infer_schema;
pub use types::{RenderHint, ValueKind};
