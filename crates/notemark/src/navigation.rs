//! Cursor for stepping through highlighted spans across documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of one span in the navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRef {
    /// Position of the document in the rebuilt document list.
    pub doc_index: usize,
    pub doc_id: String,
    /// Index into that document's span list.
    pub span_index: usize,
    /// Byte offset of the span start in the document text.
    pub offset: usize,
}

/// Tracks which span is current, with wraparound next/prev.
///
/// The cursor is `Idle` when it holds no spans. Otherwise it is active, with
/// no current span until the first move. Order is document order, then span
/// start within each document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationCursor {
    spans: Vec<SpanRef>,
    current: Option<usize>,
}

impl NavigationCursor {
    /// A cursor over `spans`, already in navigation order.
    pub fn new(spans: Vec<SpanRef>) -> Self {
        Self {
            spans,
            current: None,
        }
    }

    /// True when there is nothing to navigate.
    pub fn is_idle(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of spans.
    pub fn total(&self) -> usize {
        self.spans.len()
    }

    /// Index of the current span, if one has been selected.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Move to the next span, wrapping to the first after the last.
    pub fn next(&mut self) -> Option<&SpanRef> {
        if self.is_idle() {
            return None;
        }
        let next = match self.current {
            None => 0,
            Some(i) => (i + 1) % self.spans.len(),
        };
        self.current = Some(next);
        self.current()
    }

    /// Move to the previous span, wrapping to the last before the first.
    ///
    /// Before any move, `prev` selects the last span.
    pub fn prev(&mut self) -> Option<&SpanRef> {
        if self.is_idle() {
            return None;
        }
        let last = self.spans.len() - 1;
        let prev = match self.current {
            None | Some(0) => last,
            Some(i) => i - 1,
        };
        self.current = Some(prev);
        self.current()
    }

    /// Drop every span and return to `Idle`.
    pub fn clear(&mut self) {
        self.spans.clear();
        self.current = None;
    }

    /// The current span reference.
    pub fn current(&self) -> Option<&SpanRef> {
        self.current.and_then(|i| self.spans.get(i))
    }

    /// Document id and start offset of the current span.
    pub fn current_location(&self) -> Option<(&str, usize)> {
        self.current().map(|r| (r.doc_id.as_str(), r.offset))
    }

    /// One-based position and total, for "k of n" display.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current.map(|i| (i + 1, self.spans.len()))
    }

    /// All span references in navigation order.
    pub fn spans(&self) -> &[SpanRef] {
        &self.spans
    }
}

impl fmt::Display for NavigationCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let k = self.current.map(|i| i + 1).unwrap_or(0);
        write!(f, "{} of {}", k, self.spans.len())
    }
}
