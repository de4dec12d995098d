//! Field normalization for specimen rows.
//!
//! Each function here is total: malformed input maps to a documented
//! fallback value rather than an error, except for cost cells under
//! [`CostPolicy::Strict`].

mod coerce;
mod country;
mod elements;
mod markup;

pub use coerce::{CostPolicy, DiscoveryYear, coerce_cost, coerce_year};
pub use country::{CountryResolver, CountryRule, NationLookup, RuleMatch, default_rules};
pub use elements::extract_elements;
pub use markup::strip_markup;
