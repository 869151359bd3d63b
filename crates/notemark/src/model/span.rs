//! Located spans and rendered segments.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A located match of a quote inside one document.
///
/// Offsets are byte offsets into the document text, `end` exclusive, and
/// always fall on `char` boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// The matched document text (not the quote as submitted).
    pub text: String,
    /// Claims supported by this span, in first-seen order.
    pub claims: IndexSet<String>,
}

impl Span {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Claims joined for a single-line label.
    pub fn claims_label(&self) -> String {
        self.claims
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A contiguous piece of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Text with no evidence attached.
    Plain { text: String },
    /// Text that substantiates one or more claims.
    Highlighted {
        text: String,
        claims: IndexSet<String>,
    },
}

impl Segment {
    /// The segment's text, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Highlighted { text, .. } => text,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted { .. })
    }

    /// Claims attached to a highlighted segment.
    pub fn claims(&self) -> Option<&IndexSet<String>> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Highlighted { claims, .. } => Some(claims),
        }
    }
}
