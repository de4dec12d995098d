//! Fuzz target for discovery-year and cost coercion.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lapidary::normalize::{CostPolicy, DiscoveryYear, coerce_cost, coerce_year};
use lapidary::Cell;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let cell = Cell::Text(text.to_string());

        // Text cells never coerce to an absent year
        assert!(!matches!(coerce_year(Some(&cell)), DiscoveryYear::Absent));

        // Lenient cost coercion never fails
        assert!(coerce_cost(Some(&cell), CostPolicy::Lenient, "fuzz").is_ok());
    }
});
