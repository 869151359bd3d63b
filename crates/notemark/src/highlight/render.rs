//! Renders a document as plain and highlighted segments.

use crate::model::{Segment, Span};

/// Split `text` into segments around `spans`.
///
/// `spans` must be sorted and non-overlapping, as produced by the scanner.
/// The concatenated segment text always equals `text`. A document without
/// spans renders as a single plain segment.
pub fn render(text: &str, spans: &[Span]) -> Vec<Segment> {
    if spans.is_empty() {
        return vec![Segment::Plain {
            text: text.to_string(),
        }];
    }

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        debug_assert!(span.start >= cursor, "spans must be sorted and disjoint");
        if span.start > cursor {
            segments.push(Segment::Plain {
                text: text[cursor..span.start].to_string(),
            });
        }
        segments.push(Segment::Highlighted {
            text: text[span.start..span.end].to_string(),
            claims: span.claims.clone(),
        });
        cursor = span.end;
    }

    if cursor < text.len() {
        segments.push(Segment::Plain {
            text: text[cursor..].to_string(),
        });
    }

    segments
}
