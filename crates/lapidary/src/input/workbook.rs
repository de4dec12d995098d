//! Workbook loader built on calamine.

use std::fs;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{LapidaryError, Result};
use super::source::{Cell, SheetTable, SourceMetadata};

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Sheet holding one specimen per row.
    pub data_sheet: String,
    /// Sheet mapping country codes to display names.
    pub nations_sheet: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_sheet: "data".to_string(),
            nations_sheet: "nations".to_string(),
        }
    }
}

/// Both sheets of a workbook plus metadata about the file.
#[derive(Debug, Clone)]
pub struct LoadedWorkbook {
    pub data: SheetTable,
    pub nations: SheetTable,
    pub source: SourceMetadata,
}

/// Reads the data and nations sheets from a spreadsheet workbook.
pub struct WorkbookLoader {
    config: LoaderConfig,
}

impl WorkbookLoader {
    /// Create a new loader with default sheet names.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load both sheets from the workbook at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedWorkbook> {
        let path = path.as_ref();

        // Read the file up front so a missing path surfaces as an IO error
        let contents = fs::read(path).map_err(|e| LapidaryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let mut workbook = open_workbook_auto(path)?;
        let sheet_names = workbook.sheet_names();
        debug!(sheets = ?sheet_names, "opened workbook");

        let mut read_sheet = |name: &str| -> Result<SheetTable> {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(LapidaryError::MissingSheet(name.to_string()));
            }
            let range = workbook.worksheet_range(name)?;
            range_to_table(name, &range)
        };

        let data = read_sheet(self.config.data_sheet.as_str())?;
        let nations = read_sheet(self.config.nations_sheet.as_str())?;

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            data.row_count(),
            nations.row_count(),
        );

        info!(
            file = %source.file,
            hash = %source.hash,
            data_rows = source.data_rows,
            nation_rows = source.nation_rows,
            "loaded workbook"
        );

        Ok(LoadedWorkbook {
            data,
            nations,
            source,
        })
    }
}

impl Default for WorkbookLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a calamine range into a table, taking the first row as headers.
fn range_to_table(name: &str, range: &Range<Data>) -> Result<SheetTable> {
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| LapidaryError::EmptyData(format!("sheet '{}' has no header row", name)))?
        .iter()
        .map(|cell| match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => String::new(),
            other => other.to_string(),
        })
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(LapidaryError::EmptyData(format!(
            "sheet '{}' has an empty header row",
            name
        )));
    }

    let rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(SheetTable::new(name, headers, rows))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
