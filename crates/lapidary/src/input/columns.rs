//! Header names of the source workbook columns.

use serde::{Deserialize, Serialize};

use crate::error::{LapidaryError, Result};
use super::source::SheetTable;

/// Column headers of the data sheet.
///
/// Defaults match the production catalog workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Unique row identifier; rows without one are dropped.
    pub id: String,
    /// Primary (Russian) name.
    pub name: String,
    /// Alternate names.
    pub other_names: String,
    /// IMA-approved name.
    pub ima_name: String,
    /// Abbreviation.
    pub abbreviation: String,
    /// Mineral class.
    pub class: String,
    /// Formula with HTML markup.
    pub formula: String,
    /// Crystal system.
    pub crystal_system: String,
    /// Type locality.
    pub locality: String,
    /// Alpha-3 country code.
    pub country: String,
    /// Year of discovery.
    pub discovery_year: String,
    /// Specimen cost.
    pub cost: String,
    /// Cost band label.
    pub cost_band: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: "col-ID".to_string(),
            name: "Название".to_string(),
            other_names: "Прочие".to_string(),
            ima_name: "IMA Name".to_string(),
            abbreviation: "Сокращение".to_string(),
            class: "Класс".to_string(),
            formula: "Формула".to_string(),
            crystal_system: "Сингония".to_string(),
            locality: "Месторождение".to_string(),
            country: "Страна".to_string(),
            discovery_year: "Год открытия".to_string(),
            cost: "Стоимость".to_string(),
            cost_band: "УЕ".to_string(),
        }
    }
}

impl ColumnMap {
    /// Columns that may be absent from the sheet; they read as blank.
    pub fn optional(&self) -> [&str; 12] {
        [
            self.name.as_str(),
            self.other_names.as_str(),
            self.ima_name.as_str(),
            self.abbreviation.as_str(),
            self.class.as_str(),
            self.formula.as_str(),
            self.crystal_system.as_str(),
            self.locality.as_str(),
            self.country.as_str(),
            self.discovery_year.as_str(),
            self.cost.as_str(),
            self.cost_band.as_str(),
        ]
    }

    /// Check the data sheet header.
    ///
    /// Returns the optional columns that are missing; a missing identifier
    /// column is an error.
    pub fn check(&self, table: &SheetTable) -> Result<Vec<String>> {
        require(table, &self.id)?;
        Ok(self
            .optional()
            .into_iter()
            .filter(|column| !table.has_column(column))
            .map(str::to_string)
            .collect())
    }
}

/// Column headers of the nations lookup sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationColumns {
    /// ISO 3166 alpha-3 code.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl Default for NationColumns {
    fn default() -> Self {
        Self {
            code: "Alpha3".to_string(),
            name: "Наименование".to_string(),
        }
    }
}

impl NationColumns {
    /// Both nation columns are required.
    pub fn check(&self, table: &SheetTable) -> Result<()> {
        require(table, &self.code)?;
        require(table, &self.name)
    }
}

fn require(table: &SheetTable, column: &str) -> Result<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(LapidaryError::MissingColumn {
            sheet: table.name.clone(),
            column: column.to_string(),
        })
    }
}
