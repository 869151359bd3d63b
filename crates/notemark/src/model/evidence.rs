//! Evidence produced by the answer-generation service.
//!
//! The service reports evidence per claim, each claim carrying a list of
//! quotes with the note they came from. The highlighter works on the flat
//! [`EvidenceTuple`] form produced by [`flatten_evidence`].

use serde::{Deserialize, Serialize};

/// One (claim, quote, source document) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceTuple {
    /// Assertion the quote supports. May be empty.
    pub claim: String,
    /// Text the service says appears in the source document.
    pub quote: String,
    /// Identifier of the document the quote was taken from.
    pub source_doc_id: String,
}

impl EvidenceTuple {
    /// Create an evidence tuple.
    pub fn new(
        claim: impl Into<String>,
        quote: impl Into<String>,
        source_doc_id: impl Into<String>,
    ) -> Self {
        Self {
            claim: claim.into(),
            quote: quote.into(),
            source_doc_id: source_doc_id.into(),
        }
    }
}

/// A quoted passage backing a claim.
///
/// Payloads name the source note in `source`, `note_id`, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
}

impl Quote {
    /// Create a quote taken from `source`.
    pub fn new(quote: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            source: Some(source.into()),
            note_id: None,
        }
    }

    /// Id of the source note: `source`, else `note_id`, else empty.
    pub fn source_id(&self) -> &str {
        self.source
            .as_deref()
            .or(self.note_id.as_deref())
            .unwrap_or_default()
    }
}

/// A claim with its supporting quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes: Option<Vec<Quote>>,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A chat message, with evidence attached when the assistant produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<Evidence>>,
}

impl AssistantMessage {
    /// Flattened evidence for this message; empty if it carries none.
    pub fn evidence_tuples(&self) -> Vec<EvidenceTuple> {
        self.evidence
            .as_deref()
            .map(flatten_evidence)
            .unwrap_or_default()
    }
}

/// Flatten per-claim evidence into tuples, claim order then quote order.
///
/// A missing claim becomes the empty string; a missing quote list adds nothing.
pub fn flatten_evidence(evidence: &[Evidence]) -> Vec<EvidenceTuple> {
    evidence
        .iter()
        .flat_map(|ev| {
            let claim = ev.claim.clone().unwrap_or_default();
            ev.quotes
                .iter()
                .flatten()
                .map(move |q| EvidenceTuple::new(claim.clone(), q.quote.clone(), q.source_id()))
        })
        .collect()
}
