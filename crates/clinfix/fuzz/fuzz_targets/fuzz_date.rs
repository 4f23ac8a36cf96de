//! Fuzz target for date parsing and temporal queries.
//!
//! This fuzzer tests that:
//! 1. Date parsing never panics on any input
//! 2. Regex-based partial date handling doesn't crash on pathological input
//! 3. Query generation tolerates arbitrary date cells

#![no_main]

use libfuzzer_sys::fuzz_target;
use clinfix::query::parse_date;
use clinfix::{Dataset, QueryGenerator};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_date(content);

        let dataset = Dataset::from_text(
            "AE.csv",
            &["USUBJID", "AESTDTC", "BRTHDTC"],
            &[vec!["S1", content, "1990-01-01"], vec!["S2", "2020-01-01", content]],
        );
        let _ = QueryGenerator::default().generate(&dataset);
    }
});
