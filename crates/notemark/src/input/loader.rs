//! JSON loaders for notes and evidence files.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde_json::Value;

use crate::error::{NotemarkError, Result};
use crate::model::{AssistantMessage, Evidence, EvidenceTuple, Note, PatientRecord, flatten_evidence};

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| NotemarkError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse a notes document: a patient record or a bare array of notes.
pub fn parse_notes(json: &str) -> Result<PatientRecord> {
    let record = match serde_json::from_str::<Value>(json)? {
        value @ Value::Array(_) => PatientRecord {
            metadata: Default::default(),
            notes: serde_json::from_value::<Vec<Note>>(value)?,
        },
        value @ Value::Object(_) => serde_json::from_value::<PatientRecord>(value)?,
        _ => {
            return Err(serde_json::Error::custom(
                "expected a patient record object or an array of notes",
            )
            .into());
        }
    };

    if record.notes.is_empty() {
        return Err(NotemarkError::EmptyData("No notes found".to_string()));
    }

    Ok(record)
}

/// Parse an evidence document into flat tuples.
///
/// Accepts an assistant message, an array of per-claim evidence, or an array
/// of `[claim, quote, source]` triples. The shape is chosen from the JSON
/// structure, so a malformed entry reports its own error.
pub fn parse_evidence(json: &str) -> Result<Vec<EvidenceTuple>> {
    let tuples = match serde_json::from_str::<Value>(json)? {
        value @ Value::Object(_) => serde_json::from_value::<AssistantMessage>(value)?.evidence_tuples(),
        Value::Array(items) if items.first().is_some_and(Value::is_array) => {
            serde_json::from_value::<Vec<(String, String, String)>>(Value::Array(items))?
                .into_iter()
                .map(|(claim, quote, source)| EvidenceTuple::new(claim, quote, source))
                .collect()
        }
        value @ Value::Array(_) => flatten_evidence(&serde_json::from_value::<Vec<Evidence>>(value)?),
        _ => {
            return Err(serde_json::Error::custom(
                "expected an assistant message, an evidence array, or claim triples",
            )
            .into());
        }
    };
    Ok(tuples)
}

/// Load a notes file from disk.
pub fn load_notes(path: impl AsRef<Path>) -> Result<PatientRecord> {
    parse_notes(&read_to_string(path.as_ref())?)
}

/// Load an evidence file from disk.
pub fn load_evidence(path: impl AsRef<Path>) -> Result<Vec<EvidenceTuple>> {
    parse_evidence(&read_to_string(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_bare_note_array() {
        let record = parse_notes(r#"[{"note_id": "n1", "text": "a"}, {"note_id": "n2", "text": "b"}]"#).unwrap();
        assert_eq!(record.notes.len(), 2);
        assert_eq!(record.metadata.mrn, "");
    }

    #[test]
    fn test_parse_empty_notes_rejected() {
        let err = parse_notes("[]").unwrap_err();
        assert!(matches!(err, NotemarkError::EmptyData(_)));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_notes("{not json").unwrap_err();
        assert!(matches!(err, NotemarkError::Json(_)));
    }

    #[test]
    fn test_parse_evidence_shapes() {
        let message = r#"{"role": "assistant", "content": "",
            "evidence": [{"claim": "c1", "quotes": [{"quote": "We", "source": "note2"}]}]}"#;
        let evidence = r#"[{"claim": "c1", "quotes": [{"quote": "We", "note_id": "note2"}]}]"#;
        let triples = r#"[["c1", "We", "note2"]]"#;

        let expected = vec![EvidenceTuple::new("c1", "We", "note2")];
        assert_eq!(parse_evidence(message).unwrap(), expected);
        assert_eq!(parse_evidence(evidence).unwrap(), expected);
        assert_eq!(parse_evidence(triples).unwrap(), expected);
    }

    #[test]
    fn test_parse_quote_with_source_and_note_id() {
        let json = r#"[{"claim": "c1", "quotes": [{"quote": "We", "source": "note2", "note_id": "note2"}]}]"#;
        assert_eq!(
            parse_evidence(json).unwrap(),
            vec![EvidenceTuple::new("c1", "We", "note2")]
        );
    }

    #[test]
    fn test_malformed_evidence_names_the_problem() {
        let err = parse_evidence(r#"[{"claim": "c1", "quotes": [{"source": "note2"}]}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `quote`"), "{err}");

        let err = parse_evidence(r#"[["c1", "We"]]"#).unwrap_err();
        assert!(matches!(err, NotemarkError::Json(_)));

        let err = parse_evidence("42").unwrap_err();
        assert!(err.to_string().contains("assistant message"), "{err}");
    }

    #[test]
    fn test_load_from_disk() {
        let notes = create_test_file(
            r#"{"metadata": {"name": "Jane", "mrn": "42", "n_notes": 1},
                "notes": [{"note_id": "note2", "text": "We met the family."}]}"#,
        );
        let evidence = create_test_file(r#"[["c1", "we", "note2"]]"#);

        let record = load_notes(notes.path()).unwrap();
        assert_eq!(record.metadata.name, "Jane");
        assert_eq!(load_evidence(evidence.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_notes("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, NotemarkError::Io { .. }));
    }
}
