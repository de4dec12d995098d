//! Lapidary: mineral specimen catalog builder.
//!
//! Reads a spreadsheet of mineral specimens (a `data` sheet plus a `nations`
//! lookup sheet) and produces a normalized per-record JSON dataset and a
//! summary grouped by mineral class.
//!
//! # Pipeline
//!
//! - **Load**: both sheets are read into memory ([`input`])
//! - **Normalize**: formulas are stripped of markup and tokenized into
//!   element symbols, country codes resolved, years and costs coerced
//!   ([`normalize`])
//! - **Assemble**: one [`SpecimenRecord`] per identified row, in sheet order
//! - **Aggregate**: overall and per-class statistics ([`summary`])
//! - **Write**: `data.json` and `summary.json` ([`output`])
//!
//! # Example
//!
//! ```no_run
//! use lapidary::Catalog;
//!
//! let output = Catalog::new().build("minerals.xlsx").unwrap();
//! let paths = output.write(".").unwrap();
//!
//! println!("Wrote {}", paths.data.display());
//! ```

pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod record;
pub mod summary;

mod catalog;

pub use crate::catalog::{Catalog, CatalogConfig, CatalogOutput};
pub use error::{LapidaryError, Result};
pub use input::{Cell, ColumnMap, SheetTable, SourceMetadata};
pub use normalize::{CostPolicy, CountryResolver, CountryRule, DiscoveryYear, NationLookup, RuleMatch};
pub use output::OutputPaths;
pub use record::SpecimenRecord;
pub use summary::{ClassStats, OverallStats, Summary};
