//! Notemark: evidence highlighting for clinical notes.
//!
//! An answer-generation service backs its claims with quotes from a patient's
//! notes. Notemark finds those quotes in the notes, merges claims that cite
//! the same passage, renders each note as plain and highlighted segments, and
//! provides a cursor for stepping through every highlight.
//!
//! # Core Principles
//!
//! - **Lossless**: Rendered segments always concatenate back to the note text
//! - **Deterministic**: The same notes and evidence give the same highlights
//! - **Local failures**: A bad quote costs one note its highlights, never the rebuild
//!
//! # Example
//!
//! ```
//! use notemark::{Document, EvidenceTuple, Highlighter};
//!
//! let notes = vec![Document::new("note2", "We met with the family.")];
//! let evidence = vec![EvidenceTuple::new("claim2", "We", "note2")];
//!
//! let mut result = Highlighter::new().rebuild(&notes, &evidence);
//! assert_eq!(result.documents[0].spans.len(), 1);
//!
//! result.cursor.next();
//! assert_eq!(result.cursor.current_location(), Some(("note2", 0)));
//! ```

pub mod error;
pub mod highlight;
pub mod input;
pub mod model;
pub mod navigation;

mod highlighter;

pub use crate::highlighter::{
    Diagnostics, HighlightConfig, HighlightResult, Highlighter, DEFAULT_SIZE_LIMIT,
};
pub use error::{NotemarkError, Result};
pub use highlight::{DocumentHighlights, QuoteGroup};
pub use model::{
    AssistantMessage, Document, Evidence, EvidenceTuple, Note, PatientRecord, Quote, Segment,
    SourceDocument, Span,
};
pub use navigation::{NavigationCursor, SpanRef};
