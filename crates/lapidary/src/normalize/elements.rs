//! Element symbol extraction.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static ELEMENT_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]?").unwrap());

/// Extract distinct element symbols from plain-text formula, in order of first appearance.
///
/// A symbol is one uppercase ASCII letter optionally followed by one
/// lowercase ASCII letter; digits, brackets and punctuation are skipped.
pub fn extract_elements(formula: &str) -> Vec<String> {
    ELEMENT_SYMBOL
        .find_iter(formula)
        .map(|m| m.as_str())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dolomite() {
        assert_eq!(extract_elements("CaMg(CO3)2"), vec!["Ca", "Mg", "C", "O"]);
    }

    #[test]
    fn test_duplicates_dropped() {
        assert_eq!(extract_elements("Fe2+Fe3+2O4"), vec!["Fe", "O"]);
    }

    #[test]
    fn test_lowercase_prefix_ignored() {
        // The "n" in hydrate notation is not a symbol
        assert_eq!(extract_elements("CaSO4 · nH2O"), vec!["Ca", "S", "O", "H"]);
    }

    #[test]
    fn test_empty() {
        assert!(extract_elements("").is_empty());
        assert!(extract_elements("123 ()").is_empty());
    }
}
