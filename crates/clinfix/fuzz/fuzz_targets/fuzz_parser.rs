//! Fuzz target for the data parser and the cleaning pipeline.
//!
//! This fuzzer tests that:
//! 1. The parser never panics on malformed input
//! 2. Any dataset the parser accepts can be processed without panicking
//! 3. Cleaning preserves the dataset shape

#![no_main]

use libfuzzer_sys::fuzz_target;
use clinfix::{Clinfix, Parser};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(dataset) = Parser::new().parse_str("AE.csv", content) {
        let result = Clinfix::new().process_dataset(&dataset);
        assert_eq!(result.cleaned.row_count(), dataset.row_count());
        assert_eq!(result.cleaned.headers, dataset.headers);
    }
});
