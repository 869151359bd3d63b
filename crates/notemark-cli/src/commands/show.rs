//! Show command - print notes with evidence highlighted inline.

use colored::Colorize;
use notemark::{Note, Segment};

use super::{load, print_diagnostics};
use crate::cli::InputArgs;

pub fn run(
    input: InputArgs,
    note_filter: Option<String>,
    no_color: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (record, result) = load(&input)?;

    if let Some(ref id) = note_filter {
        if result.document(id).is_none() {
            return Err(format!("Note not found: {}", id).into());
        }
    }

    if !record.metadata.name.is_empty() {
        println!(
            "{} {} (MRN {})",
            "Patient".cyan().bold(),
            record.metadata.name.white().bold(),
            record.metadata.mrn
        );
        println!();
    }

    for (note, doc) in record.notes.iter().zip(&result.documents) {
        if note_filter.as_deref().is_some_and(|id| id != note.note_id) {
            continue;
        }

        print_header(note);

        let mut labels = Vec::new();
        let mut body = String::new();
        for segment in &doc.segments {
            match segment {
                Segment::Plain { text } => body.push_str(text),
                Segment::Highlighted { text, claims } => {
                    labels.push(claims.iter().map(String::as_str).collect::<Vec<_>>().join(", "));
                    let marker = format!("[{}]", labels.len());
                    if no_color {
                        body.push_str(&format!("[[{}]]{}", text, marker));
                    } else {
                        body.push_str(&format!("{}{}", text.black().on_yellow(), marker.yellow()));
                    }
                }
            }
        }
        println!("{}", body);

        if !labels.is_empty() {
            println!();
            for (i, label) in labels.iter().enumerate() {
                let label = if label.is_empty() { "(no claim)" } else { label.as_str() };
                println!("  [{}] {}", i + 1, label.dimmed());
            }
        }

        if let Some(ref warning) = doc.warning {
            println!("  {} {}", "Warning:".red().bold(), warning);
        }
        if verbose && !doc.unmatched_quotes.is_empty() {
            for quote in &doc.unmatched_quotes {
                println!("  {} \"{}\"", "Not found:".yellow(), quote);
            }
        }
        println!();
    }

    print_diagnostics(&result.diagnostics, verbose);

    Ok(())
}

fn print_header(note: &Note) {
    let charted = note
        .charted_at()
        .map(|dt| dt.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_default();

    println!(
        "{} {} {}",
        note.note_id.cyan().bold(),
        note.display_type().white(),
        charted.dimmed()
    );
    println!("{}", "─".repeat(60).dimmed());
}
