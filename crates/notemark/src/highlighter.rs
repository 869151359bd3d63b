//! Highlighter: runs the pipeline over a document set and builds the cursor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{NotemarkError, Result};
use crate::highlight::{highlight_document, DocumentHighlights, QuoteGroups};
use crate::model::{flatten_evidence, Evidence, EvidenceTuple, SourceDocument, Span};
use crate::navigation::{NavigationCursor, SpanRef};

/// Default compiled-pattern size limit (10 MiB).
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Configuration for quote matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Letter case is ignored when grouping and matching quotes.
    pub case_insensitive: bool,
    /// A whitespace run in a quote matches any whitespace run in the text.
    pub flexible_whitespace: bool,
    /// `"` and `'` (and their typographic forms) match each other.
    pub flexible_quotes: bool,
    /// Upper bound on the compiled size of one document's pattern, in bytes.
    pub size_limit: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            flexible_whitespace: true,
            flexible_quotes: true,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

impl HighlightConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case-insensitive grouping and matching.
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Set whitespace flexibility.
    pub fn with_flexible_whitespace(mut self, enabled: bool) -> Self {
        self.flexible_whitespace = enabled;
        self
    }

    /// Set quote-character flexibility.
    pub fn with_flexible_quotes(mut self, enabled: bool) -> Self {
        self.flexible_quotes = enabled;
        self
    }

    /// Set the compiled pattern size limit.
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = bytes;
        self
    }

    /// Reject settings that can never produce a matcher.
    pub fn validate(&self) -> Result<()> {
        if self.size_limit == 0 {
            return Err(NotemarkError::Config(
                "size_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Counters describing what a rebuild did with its evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Evidence tuples received.
    pub total_tuples: usize,
    /// Quotes skipped because they were empty after trimming.
    pub empty_quotes_ignored: usize,
    /// Tuples naming a document that is not in the set.
    pub invalid_references: Vec<EvidenceTuple>,
    /// Quote groups that matched nowhere in their document.
    pub unmatched_quotes: usize,
    /// Documents shown without highlights because their quotes failed to compile.
    pub compile_failures: usize,
    /// Spans found across all documents.
    pub total_spans: usize,
}

impl Diagnostics {
    /// Whether every quote was placed.
    pub fn is_clean(&self) -> bool {
        self.empty_quotes_ignored == 0
            && self.invalid_references.is_empty()
            && self.unmatched_quotes == 0
            && self.compile_failures == 0
    }
}

/// Output of one rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightResult {
    /// One entry per input document, in input order.
    pub documents: Vec<DocumentHighlights>,
    pub diagnostics: Diagnostics,
    /// Navigation over every span, starting with no current span.
    pub cursor: NavigationCursor,
}

impl HighlightResult {
    /// Highlights for the document with the given id.
    pub fn document(&self, doc_id: &str) -> Option<&DocumentHighlights> {
        self.documents.iter().find(|d| d.doc_id == doc_id)
    }

    /// The span the cursor points at.
    pub fn current_span(&self) -> Option<(&DocumentHighlights, &Span)> {
        let span_ref = self.cursor.current()?;
        self.resolve(span_ref)
    }

    /// Every span in navigation order, with its document.
    pub fn spans(&self) -> impl Iterator<Item = (&DocumentHighlights, &Span)> {
        self.documents
            .iter()
            .flat_map(|doc| doc.spans.iter().map(move |span| (doc, span)))
    }

    fn resolve(&self, span_ref: &SpanRef) -> Option<(&DocumentHighlights, &Span)> {
        let doc = self.documents.get(span_ref.doc_index)?;
        let span = doc.spans.get(span_ref.span_index)?;
        Some((doc, span))
    }
}

/// Locates evidence quotes in documents.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a highlighter with default configuration.
    pub fn new() -> Self {
        Self::with_config(HighlightConfig::default())
    }

    /// Create a highlighter with custom configuration.
    pub fn with_config(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Highlight `evidence` in `documents` and build a fresh cursor.
    ///
    /// Never fails as a whole. Tuples naming an unknown document are dropped,
    /// and a document whose quotes cannot be compiled is returned plain with a
    /// warning. Identical inputs give identical results.
    pub fn rebuild<D: SourceDocument>(
        &self,
        documents: &[D],
        evidence: &[EvidenceTuple],
    ) -> HighlightResult {
        let mut diagnostics = Diagnostics {
            total_tuples: evidence.len(),
            ..Diagnostics::default()
        };

        let mut by_doc: HashMap<&str, Vec<&EvidenceTuple>> =
            documents.iter().map(|d| (d.id(), Vec::new())).collect();

        for tuple in evidence {
            match by_doc.get_mut(tuple.source_doc_id.as_str()) {
                Some(bucket) => bucket.push(tuple),
                None => {
                    debug!(
                        source = %tuple.source_doc_id,
                        claim = %tuple.claim,
                        "dropping evidence for unknown document"
                    );
                    diagnostics.invalid_references.push(tuple.clone());
                }
            }
        }

        let mut results = Vec::with_capacity(documents.len());
        for doc in documents {
            let tuples = by_doc.get(doc.id()).map(Vec::as_slice).unwrap_or_default();
            let groups = QuoteGroups::with_config(tuples.iter().copied(), &self.config);
            diagnostics.empty_quotes_ignored += groups.empty_quotes();

            let highlights = match highlight_document(doc.id(), doc.text(), &groups, &self.config)
            {
                Ok(highlights) => highlights,
                Err(e) => {
                    warn!(doc_id = %doc.id(), error = %e, "showing document without highlights");
                    diagnostics.compile_failures += 1;
                    DocumentHighlights::unhighlighted(doc.id(), doc.text(), e.to_string())
                }
            };

            debug!(
                doc_id = %doc.id(),
                quotes = groups.len(),
                spans = highlights.spans.len(),
                unmatched = highlights.unmatched_quotes.len(),
                "highlighted document"
            );

            diagnostics.unmatched_quotes += highlights.unmatched_quotes.len();
            diagnostics.total_spans += highlights.spans.len();
            results.push(highlights);
        }

        let cursor = NavigationCursor::new(
            results
                .iter()
                .enumerate()
                .flat_map(|(doc_index, doc)| {
                    doc.spans.iter().enumerate().map(move |(i, span)| SpanRef {
                        doc_index,
                        doc_id: doc.doc_id.clone(),
                        span_index: i,
                        offset: span.start,
                    })
                })
                .collect(),
        );

        HighlightResult {
            documents: results,
            diagnostics,
            cursor,
        }
    }

    /// Flatten per-claim evidence and rebuild.
    pub fn rebuild_from_evidence<D: SourceDocument>(
        &self,
        documents: &[D],
        evidence: &[Evidence],
    ) -> HighlightResult {
        self.rebuild(documents, &flatten_evidence(evidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn test_config_validate() {
        assert!(HighlightConfig::default().validate().is_ok());
        let err = HighlightConfig::default().with_size_limit(0).validate();
        assert!(matches!(err, Err(NotemarkError::Config(_))));
    }

    #[test]
    fn test_invalid_references_are_dropped() {
        let docs = vec![Document::new("note1", "We met.")];
        let evidence = vec![
            EvidenceTuple::new("c1", "We", "note1"),
            EvidenceTuple::new("c2", "We", "missing"),
        ];

        let result = Highlighter::new().rebuild(&docs, &evidence);
        assert_eq!(result.diagnostics.invalid_references.len(), 1);
        assert_eq!(result.diagnostics.invalid_references[0].source_doc_id, "missing");
        assert_eq!(result.documents[0].spans.len(), 1);
        assert_eq!(result.documents[0].spans[0].claims_label(), "c1");
    }

    #[test]
    fn test_compile_failure_is_local() {
        let docs = vec![
            Document::new("long", "aaaa"),
            Document::new("short", "We met."),
        ];
        let evidence = vec![
            EvidenceTuple::new("c1", "a ".repeat(5000), "long"),
            EvidenceTuple::new("c2", "we", "short"),
        ];
        let config = HighlightConfig::default().with_size_limit(32 * 1024);

        let result = Highlighter::with_config(config).rebuild(&docs, &evidence);
        assert_eq!(result.diagnostics.compile_failures, 1);

        let long = result.document("long").unwrap();
        assert!(long.warning.is_some());
        assert!(!long.has_highlights());

        let short = result.document("short").unwrap();
        assert_eq!(short.spans.len(), 1);
        assert_eq!(result.cursor.total(), 1);
    }

    #[test]
    fn test_current_span_follows_cursor() {
        let docs = vec![
            Document::new("a", "fever and cough"),
            Document::new("b", "no fever"),
        ];
        let evidence = vec![
            EvidenceTuple::new("c1", "fever", "a"),
            EvidenceTuple::new("c2", "cough", "a"),
            EvidenceTuple::new("c1", "fever", "b"),
        ];

        let mut result = Highlighter::new().rebuild(&docs, &evidence);
        assert!(result.current_span().is_none());

        let order: Vec<_> = result
            .spans()
            .map(|(doc, span)| (doc.doc_id.as_str(), span.start))
            .collect();
        assert_eq!(order, vec![("a", 0), ("a", 10), ("b", 3)]);

        result.cursor.prev();
        let (doc, span) = result.current_span().unwrap();
        assert_eq!(doc.doc_id, "b");
        assert_eq!(span.text, "fever");
    }
}
