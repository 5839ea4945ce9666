//! Input decoding and sheet payload handling.

mod cell;
mod gviz;
mod loader;
mod table;

pub use cell::{RawCell, RawRow};
pub use gviz::parse_gviz;
pub use loader::load_snapshot;
pub use table::{ColumnDescriptor, SheetTable, SourceMetadata};
