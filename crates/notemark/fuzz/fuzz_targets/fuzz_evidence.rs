//! Fuzz target for the notes and evidence loaders.
//!
//! This fuzzer tests that JSON parsing never panics on malformed input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use notemark::input::{parse_evidence, parse_notes};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(json) = std::str::from_utf8(data) {
        let _ = parse_notes(json);
        let _ = parse_evidence(json);
    }
});
