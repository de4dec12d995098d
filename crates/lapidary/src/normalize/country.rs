//! Country code resolution.
//!
//! Resolution is two-step: a generic code-to-name lookup built from the
//! nations sheet, then an ordered list of override rules applied to the
//! lookup result. Overrides never live in the lookup table itself.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::{NationColumns, SheetTable};

/// Alpha-3 code to display name mapping.
#[derive(Debug, Clone, Default)]
pub struct NationLookup {
    names: IndexMap<String, String>,
}

impl NationLookup {
    /// Build the lookup from the nations sheet.
    ///
    /// Rows with a blank code or name are skipped; a later row overrides an
    /// earlier one with the same code.
    pub fn from_table(table: &SheetTable, columns: &NationColumns) -> Self {
        table
            .rows()
            .map(|row| (row.text(&columns.code), row.text(&columns.name)))
            .collect()
    }

    /// Display name for `code`, if mapped.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for NationLookup {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .filter(|(code, name)| !code.is_empty() && !name.is_empty())
            .collect();
        Self { names }
    }
}

/// What an override rule compares against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RuleMatch {
    /// Matches when either the raw code or the looked-up name equals the value.
    CodeOrName(String),
    /// Matches when the looked-up name equals the value.
    Name(String),
}

impl RuleMatch {
    fn matches(&self, code: &str, name: &str) -> bool {
        match self {
            RuleMatch::CodeOrName(value) => code == value || name == value,
            RuleMatch::Name(value) => name == value,
        }
    }
}

/// A country override: when `matcher` hits, the result becomes `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRule {
    pub matcher: RuleMatch,
    pub replacement: String,
}

impl CountryRule {
    pub fn new(matcher: RuleMatch, replacement: impl Into<String>) -> Self {
        Self {
            matcher,
            replacement: replacement.into(),
        }
    }
}

/// Override rules used by the production catalog.
///
/// The Khabarovsk regional marker belongs to Russia, and "England" is
/// reported as the United Kingdom.
pub fn default_rules() -> Vec<CountryRule> {
    vec![
        CountryRule::new(RuleMatch::CodeOrName("Хабаровский".to_string()), "Россия"),
        CountryRule::new(RuleMatch::Name("Англия".to_string()), "Великобритания"),
    ]
}

/// Resolves raw country codes to display names.
#[derive(Debug, Clone)]
pub struct CountryResolver {
    lookup: NationLookup,
    rules: Vec<CountryRule>,
}

impl CountryResolver {
    /// Create a resolver with the default override rules.
    pub fn new(lookup: NationLookup) -> Self {
        Self::with_rules(lookup, default_rules())
    }

    /// Create a resolver with an explicit rule list.
    pub fn with_rules(lookup: NationLookup, rules: Vec<CountryRule>) -> Self {
        Self { lookup, rules }
    }

    /// Append an override rule; it is checked after the existing ones.
    pub fn push_rule(&mut self, rule: CountryRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[CountryRule] {
        &self.rules
    }

    /// Resolve a raw code to a display name.
    ///
    /// Unmapped codes pass through unchanged; the first matching rule wins.
    pub fn resolve(&self, code: &str) -> String {
        let code = code.trim();
        let name = self.lookup.lookup(code).unwrap_or(code).trim();

        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(code, name))
            .map(|rule| rule.replacement.clone())
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> NationLookup {
        [
            ("RUS", "Россия"),
            ("GBR", "Англия"),
            ("KHB", "Хабаровский"),
            ("BRA", "Бразилия"),
            ("", "Пусто"),
            ("XXX", ""),
        ]
        .into_iter()
        .map(|(c, n)| (c.to_string(), n.to_string()))
        .collect()
    }

    #[test]
    fn test_lookup_skips_blank_rows() {
        let lookup = lookup();
        assert_eq!(lookup.len(), 4);
        assert_eq!(lookup.lookup("XXX"), None);
    }

    #[test]
    fn test_plain_lookup() {
        let resolver = CountryResolver::new(lookup());
        assert_eq!(resolver.resolve("BRA"), "Бразилия");
        assert_eq!(resolver.resolve(" BRA "), "Бразилия");
    }

    #[test]
    fn test_unmapped_code_passes_through() {
        let resolver = CountryResolver::new(lookup());
        assert_eq!(resolver.resolve("ZZZ"), "ZZZ");
        assert_eq!(resolver.resolve(""), "");
    }

    #[test]
    fn test_regional_marker_as_code() {
        let resolver = CountryResolver::new(lookup());
        assert_eq!(resolver.resolve("Хабаровский"), "Россия");
    }

    #[test]
    fn test_regional_marker_as_name() {
        let resolver = CountryResolver::new(lookup());
        assert_eq!(resolver.resolve("KHB"), "Россия");
    }

    #[test]
    fn test_legacy_name_replaced() {
        let resolver = CountryResolver::new(lookup());
        assert_eq!(resolver.resolve("GBR"), "Великобритания");
    }

    #[test]
    fn test_rules_checked_after_lookup() {
        let mut resolver = CountryResolver::with_rules(lookup(), Vec::new());
        assert_eq!(resolver.resolve("GBR"), "Англия");

        resolver.push_rule(CountryRule::new(RuleMatch::Name("Бразилия".to_string()), "Brazil"));
        assert_eq!(resolver.resolve("BRA"), "Brazil");
        assert_eq!(resolver.resolve("GBR"), "Англия");
    }

    #[test]
    fn test_later_nation_row_wins() {
        let lookup: NationLookup = [("AUT", "Австрия"), ("AUT", "Австрийская Республика")]
            .into_iter()
            .map(|(c, n)| (c.to_string(), n.to_string()))
            .collect();
        assert_eq!(lookup.lookup("AUT"), Some("Австрийская Республика"));
    }
}
