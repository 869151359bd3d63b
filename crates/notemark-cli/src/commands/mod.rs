//! CLI command implementations.

pub mod navigate;
pub mod show;
pub mod spans;

use colored::Colorize;
use notemark::input::{load_evidence, load_notes};
use notemark::{Diagnostics, HighlightResult, Highlighter, PatientRecord, Span};

use crate::cli::InputArgs;

/// Load both input files and run a rebuild.
pub fn load(input: &InputArgs) -> Result<(PatientRecord, HighlightResult), Box<dyn std::error::Error>> {
    for path in [&input.notes, &input.evidence] {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }

    let config = input.config();
    config.validate()?;

    let record = load_notes(&input.notes)?;
    let evidence = load_evidence(&input.evidence)?;
    tracing::debug!(
        notes = record.notes.len(),
        tuples = evidence.len(),
        "loaded inputs"
    );

    let result = Highlighter::with_config(config).rebuild(&record.notes, &evidence);
    Ok((record, result))
}

/// Print what could not be highlighted, if anything.
pub fn print_diagnostics(diagnostics: &Diagnostics, verbose: bool) {
    println!(
        "Found {} highlights for {} evidence quotes",
        diagnostics.total_spans.to_string().white().bold(),
        diagnostics.total_tuples
    );

    if diagnostics.is_clean() {
        return;
    }

    if diagnostics.unmatched_quotes > 0 {
        println!(
            "  {} {} quotes not found in their note",
            "•".yellow(),
            diagnostics.unmatched_quotes
        );
    }
    if !diagnostics.invalid_references.is_empty() {
        println!(
            "  {} {} quotes cite notes that are not loaded",
            "•".yellow(),
            diagnostics.invalid_references.len()
        );
        if verbose {
            for tuple in &diagnostics.invalid_references {
                println!("      {} ← {}", tuple.source_doc_id.dimmed(), tuple.quote);
            }
        }
    }
    if diagnostics.empty_quotes_ignored > 0 {
        println!(
            "  {} {} empty quotes ignored",
            "•".yellow(),
            diagnostics.empty_quotes_ignored
        );
    }
    if diagnostics.compile_failures > 0 {
        println!(
            "  {} {} notes shown without highlights",
            "•".red(),
            diagnostics.compile_failures
        );
    }
}

/// Text around `span`, widened by `context` bytes on each side.
///
/// Returns (before, span text, after), cut on char boundaries.
pub fn snippet<'a>(text: &'a str, span: &Span, context: usize) -> (&'a str, &'a str, &'a str) {
    let mut start = span.start.saturating_sub(context);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (span.end + context).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }

    (
        &text[start..span.start],
        &text[span.start..span.end],
        &text[span.end..end],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notemark::{Document, EvidenceTuple};

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let text = "café – we met – ok";
        let docs = vec![Document::new("n", text)];
        let evidence = vec![EvidenceTuple::new("c", "we met", "n")];
        let result = Highlighter::new().rebuild(&docs, &evidence);
        let span = &result.documents[0].spans[0];

        let (before, hit, after) = snippet(text, span, 3);
        assert_eq!(hit, "we met");
        assert!(before.ends_with(' '));
        assert!(after.starts_with(' '));
    }
}
