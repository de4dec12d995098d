//! Raw sheet tables and source metadata.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest magnitude at which a whole `f64` is rendered without a fraction.
const WHOLE_NUMBER_LIMIT: f64 = 1e15;

/// Metadata about the source workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Workbook format taken from the file extension (xlsx, xls, ods, ...).
    pub format: String,
    /// Number of rows in the data sheet (excluding header).
    pub data_rows: usize,
    /// Number of rows in the nations sheet (excluding header).
    pub nation_rows: usize,
    /// When the workbook was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a workbook that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        data_rows: usize,
        nation_rows: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = path
            .extension()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            data_rows,
            nation_rows,
            loaded_at: Utc::now(),
        }
    }
}

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Blank, missing, or error cell.
    #[default]
    Empty,
    /// Text content, untrimmed.
    Text(String),
    /// Any numeric cell (integers, floats, date serials).
    Number(f64),
    /// Boolean cell.
    Bool(bool),
}

impl Cell {
    /// Returns true for blank cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Textual form of the cell, or `None` when the cell is blank.
    ///
    /// Whole numbers render without a fractional part, so an identifier
    /// stored as `12.0` reads as `"12"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < WHOLE_NUMBER_LIMIT {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A sheet read into memory: header row plus data rows.
#[derive(Debug, Clone)]
pub struct SheetTable {
    /// Sheet name in the workbook.
    pub name: String,
    /// Column headers (trimmed).
    pub headers: Vec<String>,
    /// Row data (row-major order), each row padded to the header width.
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    /// Create a new table, normalizing every row to the header width.
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();

        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns true if the header row contains `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Get a row view by index.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row { table: self, cells })
    }

    /// Iterate over all rows in sheet order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row { table: self, cells })
    }
}

/// Borrowed view of one sheet row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a SheetTable,
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    /// The cell under `column`, or `None` when the column is missing or the cell is blank.
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let index = self.table.column_index(column)?;
        self.cells.get(index).filter(|cell| !cell.is_empty())
    }

    /// Trimmed text under `column`; empty when absent.
    pub fn text(&self, column: &str) -> String {
        self.get(column)
            .and_then(Cell::as_text)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// Untrimmed text under `column`; empty when absent.
    pub fn raw_text(&self, column: &str) -> String {
        self.get(column).and_then(Cell::as_text).unwrap_or_default()
    }
}
