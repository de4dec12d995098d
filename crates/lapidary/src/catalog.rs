//! Main Catalog struct and public API.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::input::{ColumnMap, LoaderConfig, NationColumns, SheetTable, SourceMetadata, WorkbookLoader};
use crate::normalize::{CostPolicy, CountryResolver, CountryRule, NationLookup, default_rules};
use crate::output::{OutputPaths, write_outputs};
use crate::record::{RecordAssembler, SpecimenRecord};
use crate::summary::Summary;

/// Configuration for a catalog build.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Sheet names.
    pub loader: LoaderConfig,
    /// Data sheet headers.
    pub columns: ColumnMap,
    /// Nations sheet headers.
    pub nation_columns: NationColumns,
    /// Handling of non-numeric cost cells.
    pub cost_policy: CostPolicy,
    /// Country overrides, checked in order after the nations lookup.
    pub country_rules: Vec<CountryRule>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            columns: ColumnMap::default(),
            nation_columns: NationColumns::default(),
            cost_policy: CostPolicy::default(),
            country_rules: default_rules(),
        }
    }
}

/// Result of building a catalog from a workbook.
#[derive(Debug, Clone)]
pub struct CatalogOutput {
    /// Metadata about the source workbook.
    pub source: SourceMetadata,
    /// Normalized records in sheet order.
    pub records: Vec<SpecimenRecord>,
    /// Aggregate statistics.
    pub summary: Summary,
}

impl CatalogOutput {
    /// Write `data.json` and `summary.json` into `dir`.
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<OutputPaths> {
        write_outputs(dir, &self.records, &self.summary)
    }
}

/// Builds the specimen catalog.
pub struct Catalog {
    config: CatalogConfig,
    loader: WorkbookLoader,
}

impl Catalog {
    /// Create a new Catalog with default configuration.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create a Catalog with custom configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        let loader = WorkbookLoader::with_config(config.loader.clone());
        Self { config, loader }
    }

    /// Set the cost policy.
    pub fn with_cost_policy(mut self, policy: CostPolicy) -> Self {
        self.config.cost_policy = policy;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Load a workbook and build records and summary.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lapidary::Catalog;
    ///
    /// let output = Catalog::new().build("minerals.xlsx").unwrap();
    /// println!("Records: {}", output.records.len());
    /// output.write(".").unwrap();
    /// ```
    pub fn build(&self, path: impl AsRef<Path>) -> Result<CatalogOutput> {
        let workbook = self.loader.load(path)?;
        let (records, summary) = self.build_from_tables(&workbook.data, &workbook.nations)?;

        Ok(CatalogOutput {
            source: workbook.source,
            records,
            summary,
        })
    }

    /// Build records and summary from sheets already in memory.
    pub fn build_from_tables(
        &self,
        data: &SheetTable,
        nations: &SheetTable,
    ) -> Result<(Vec<SpecimenRecord>, Summary)> {
        self.config.nation_columns.check(nations)?;
        let lookup = NationLookup::from_table(nations, &self.config.nation_columns);
        info!(nations = lookup.len(), "built nation lookup");

        let resolver = CountryResolver::with_rules(lookup, self.config.country_rules.clone());
        let assembler = RecordAssembler::new(&self.config.columns, &resolver, self.config.cost_policy);
        let records = assembler.assemble(data)?;

        let summary = Summary::from_records(&records);
        info!(
            records = summary.overall.count,
            classes = summary.overall.classes,
            "aggregated summary"
        );

        Ok((records, summary))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
