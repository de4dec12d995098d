//! Workbook loading and raw sheet handling.

mod columns;
mod source;
mod workbook;

pub use columns::{ColumnMap, NationColumns};
pub use source::{Cell, Row, SheetTable, SourceMetadata};
pub use workbook::{LoadedWorkbook, LoaderConfig, WorkbookLoader};
