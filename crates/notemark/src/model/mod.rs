//! Data model shared by the highlighter and its callers.

mod document;
mod evidence;
mod span;

pub use document::{Document, Note, PatientMetadata, PatientRecord, SourceDocument};
pub use evidence::{flatten_evidence, AssistantMessage, Evidence, EvidenceTuple, Quote, Role};
pub use span::{Segment, Span};
