//! Loading notes and evidence from files.

mod loader;

pub use loader::{load_evidence, load_notes, parse_evidence, parse_notes};
