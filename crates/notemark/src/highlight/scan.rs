//! Left-to-right scan of a document for quote matches.

use super::pattern::QuotePattern;

/// One match, tagged with the quote group that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteMatch {
    /// Index of the quote group in declaration order.
    pub group: usize,
    pub start: usize,
    pub end: usize,
}

/// Find all non-overlapping matches of `pattern` in `text`.
///
/// Matches are leftmost-first: at a given start offset the earliest declared
/// quote wins even if a later one would match more text, and scanning resumes
/// at the end of each match. The result is sorted by `start` with
/// `matches[i].end <= matches[i + 1].start`.
///
/// One pass over `text`; each match reports its quote group directly, so the
/// cost does not grow with matches times quotes.
pub fn scan(pattern: &QuotePattern, text: &str) -> Vec<QuoteMatch> {
    let Some(regex) = pattern.regex() else {
        return Vec::new();
    };

    regex
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| QuoteMatch {
            group: m.pattern().as_usize(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
