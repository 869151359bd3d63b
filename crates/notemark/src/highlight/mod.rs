//! Per-document highlighting pipeline.
//!
//! normalize → compile → scan → merge → render. Each stage is a plain
//! function over the previous stage's output, so every rule can be tested
//! on its own.

mod merge;
mod normalize;
mod pattern;
mod render;
mod scan;

pub use merge::merge_claims;
pub use normalize::{canonicalize, QuoteGroup, QuoteGroups};
pub use pattern::{escape_quote, QuotePattern};
pub use render::render;
pub use scan::{scan, QuoteMatch};

use serde::{Deserialize, Serialize};

use crate::error::{NotemarkError, Result};
use crate::highlighter::HighlightConfig;
use crate::model::{Segment, Span};

/// Highlighting outcome for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHighlights {
    pub doc_id: String,
    /// Located spans, sorted and non-overlapping.
    pub spans: Vec<Span>,
    /// Rendered text; concatenation equals the document text.
    pub segments: Vec<Segment>,
    /// Canonical quotes addressed to this document that matched nowhere.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched_quotes: Vec<String>,
    /// Set when the quotes failed to compile and the text is shown plain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl DocumentHighlights {
    /// The document rendered with no highlights.
    pub fn plain(doc_id: &str, text: &str) -> Self {
        Self {
            doc_id: doc_id.to_string(),
            spans: Vec::new(),
            segments: render(text, &[]),
            unmatched_quotes: Vec::new(),
            warning: None,
        }
    }

    /// Fallback after a compile failure: plain text plus a warning.
    pub fn unhighlighted(doc_id: &str, text: &str, warning: impl Into<String>) -> Self {
        Self {
            warning: Some(warning.into()),
            ..Self::plain(doc_id, text)
        }
    }

    /// Whether any span was found.
    pub fn has_highlights(&self) -> bool {
        !self.spans.is_empty()
    }
}

/// Run the pipeline for one document's quote groups.
///
/// Fails only if the quotes cannot be compiled; callers fall back to
/// [`DocumentHighlights::unhighlighted`].
pub fn highlight_document(
    doc_id: &str,
    text: &str,
    groups: &QuoteGroups,
    config: &HighlightConfig,
) -> Result<DocumentHighlights> {
    if groups.is_empty() {
        return Ok(DocumentHighlights::plain(doc_id, text));
    }

    let pattern = QuotePattern::compile(groups.patterns(), config).map_err(|source| {
        NotemarkError::PatternCompile {
            doc_id: doc_id.to_string(),
            source,
        }
    })?;

    let matches = scan(&pattern, text);

    let mut matched = vec![false; groups.len()];
    for m in &matches {
        matched[m.group] = true;
    }
    let unmatched_quotes = matched
        .iter()
        .enumerate()
        .filter(|(_, hit)| !**hit)
        .filter_map(|(i, _)| groups.quote(i).map(str::to_string))
        .collect();

    let spans = merge_claims(text, &matches, groups);
    let segments = render(text, &spans);

    Ok(DocumentHighlights {
        doc_id: doc_id.to_string(),
        spans,
        segments,
        unmatched_quotes,
        warning: None,
    })
}
