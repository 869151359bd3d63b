//! Fuzz target for the highlighting pipeline.
//!
//! This fuzzer tests that highlighting:
//! 1. Never panics on arbitrary text and quotes
//! 2. Always renders segments that reproduce the note text
//! 3. Keeps spans sorted and disjoint

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notemark::{Document, EvidenceTuple, Highlighter};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    quotes: Vec<(String, String)>,
}

fuzz_target!(|input: Input| {
    // Only process reasonable-sized inputs to keep iterations fast
    if input.text.len() > 10_000 || input.quotes.len() > 64 {
        return;
    }

    let docs = vec![Document::new("note", input.text.clone())];
    let evidence: Vec<EvidenceTuple> = input
        .quotes
        .into_iter()
        .map(|(claim, quote)| EvidenceTuple::new(claim, quote, "note"))
        .collect();

    let result = Highlighter::new().rebuild(&docs, &evidence);
    let doc = &result.documents[0];

    let rendered: String = doc.segments.iter().map(|s| s.text()).collect();
    assert_eq!(rendered, input.text);

    for pair in doc.spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
});
