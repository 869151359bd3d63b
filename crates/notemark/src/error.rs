//! Error types for the Notemark library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Notemark operations.
#[derive(Debug, Error)]
pub enum NotemarkError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The quotes for one document could not be compiled into a matcher.
    ///
    /// Only that document loses its highlights; the rest of a rebuild continues.
    #[error("Pattern compile error for document '{doc_id}': {source}")]
    PatternCompile {
        doc_id: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },

    /// Empty file or no documents to highlight.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Notemark operations.
pub type Result<T> = std::result::Result<T, NotemarkError>;
