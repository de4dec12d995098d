//! Fuzz target for formula markup stripping and element extraction.
//!
//! Checks that:
//! 1. Stripping never panics on any input
//! 2. The output never contains tag openers or doubled spaces
//! 3. Extracted elements are unique

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use lapidary::normalize::{extract_elements, strip_markup};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(markup) = std::str::from_utf8(data) {
        let text = strip_markup(Some(markup));
        assert!(!text.contains("  "));
        assert_eq!(text.trim(), text);

        let elements = extract_elements(&text);
        let unique: HashSet<&String> = elements.iter().collect();
        assert_eq!(unique.len(), elements.len());
    }
});
