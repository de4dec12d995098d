//! Aggregate statistics over specimen records.

mod stats;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::SpecimenRecord;

pub use stats::{distinct_count, safe_mean, safe_sum};

/// Statistics over every record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub count: usize,
    pub total_cost: f64,
    pub avg_cost: Option<f64>,
    pub countries: usize,
    pub localities: usize,
    pub classes: usize,
}

/// Statistics over the records of one mineral class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStats {
    pub class: String,
    pub count: usize,
    pub total_cost: f64,
    pub avg_cost: Option<f64>,
    pub countries: usize,
    pub localities: usize,
}

/// Catalog summary: overall block plus per-class blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub overall: OverallStats,
    /// Sorted by `count` descending; equal counts keep class-name order.
    pub by_class: Vec<ClassStats>,
}

impl Summary {
    /// Aggregate a record set.
    pub fn from_records(records: &[SpecimenRecord]) -> Self {
        let overall = OverallStats {
            count: records.len(),
            total_cost: safe_sum(records.iter().map(|r| r.cost)),
            avg_cost: safe_mean(records.iter().map(|r| r.cost)),
            countries: distinct_count(records.iter().map(|r| r.country.as_str())),
            localities: distinct_count(records.iter().map(|r| r.locality.as_str())),
            classes: distinct_count(records.iter().map(|r| r.class.as_str())),
        };

        // BTreeMap gives the class-name order used to break count ties
        let mut groups: BTreeMap<&str, Vec<&SpecimenRecord>> = BTreeMap::new();
        for record in records.iter().filter(|r| !r.class.is_empty()) {
            groups.entry(record.class.as_str()).or_default().push(record);
        }

        let mut by_class: Vec<ClassStats> = groups
            .into_iter()
            .map(|(class, group)| ClassStats::from_group(class, &group))
            .collect();
        by_class.sort_by(|a, b| b.count.cmp(&a.count));

        Self { overall, by_class }
    }

    /// Number of records that fall into some class.
    pub fn classified_count(&self) -> usize {
        self.by_class.iter().map(|c| c.count).sum()
    }
}

impl ClassStats {
    fn from_group(class: &str, group: &[&SpecimenRecord]) -> Self {
        Self {
            class: class.to_string(),
            count: group.len(),
            total_cost: safe_sum(group.iter().map(|r| r.cost)),
            avg_cost: safe_mean(group.iter().map(|r| r.cost)),
            countries: distinct_count(group.iter().map(|r| r.country.as_str())),
            localities: distinct_count(group.iter().map(|r| r.locality.as_str())),
        }
    }
}
