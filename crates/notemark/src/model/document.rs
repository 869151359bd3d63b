//! Documents the engine highlights: plain documents and clinical notes.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layouts seen in note exports, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Anything with an identifier and immutable text that evidence can point at.
///
/// The highlighter only borrows the text, so callers keep ownership of their
/// documents across rebuilds.
pub trait SourceDocument {
    /// Identifier that evidence tuples reference as their source.
    fn id(&self) -> &str;

    /// Raw text of the document.
    fn text(&self) -> &str;
}

/// A minimal document: an identifier and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    /// Create a document.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl SourceDocument for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// A clinical note as exported by the record system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note identifier, referenced by evidence quotes.
    pub note_id: String,
    /// Free text of the note.
    pub text: String,
    /// Kind of note (e.g., "discharge", "radiology").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
    /// When the note was charted, as exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chartdatetime: Option<String>,
    /// Hospital admission the note belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hadm_id: Option<String>,
}

impl Note {
    /// Create a note with no metadata.
    pub fn new(note_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            note_id: note_id.into(),
            text: text.into(),
            note_type: None,
            chartdatetime: None,
            hadm_id: None,
        }
    }

    /// Set the note type.
    pub fn with_type(mut self, note_type: impl Into<String>) -> Self {
        self.note_type = Some(note_type.into());
        self
    }

    /// Set the charted timestamp.
    pub fn with_chartdatetime(mut self, chartdatetime: impl Into<String>) -> Self {
        self.chartdatetime = Some(chartdatetime.into());
        self
    }

    /// Human-readable label for the note type.
    pub fn display_type(&self) -> String {
        match self.note_type.as_deref() {
            None => "Note".to_string(),
            Some("discharge") => "Discharge Summary".to_string(),
            Some("radiology") => "Radiology Report".to_string(),
            Some(other) => title_case(other),
        }
    }

    /// Parse the charted timestamp, accepting a bare date as midnight.
    pub fn charted_at(&self) -> Option<NaiveDateTime> {
        let raw = self.chartdatetime.as_deref()?.trim();

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(dt);
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

impl SourceDocument for Note {
    fn id(&self) -> &str {
        &self.note_id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Demographic header for a patient's record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default)]
    pub mrn: String,
    #[serde(default)]
    pub n_notes: usize,
}

/// A patient's notes together with their demographic header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default)]
    pub metadata: PatientMetadata,
    pub notes: Vec<Note>,
}

fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
