//! Navigate command - step through highlights from stdin.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use notemark::{HighlightResult, PatientRecord};

use super::{load, print_diagnostics, snippet};
use crate::cli::InputArgs;

pub fn run(input: InputArgs, context: usize, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (record, mut result) = load(&input)?;

    print_diagnostics(&result.diagnostics, verbose);
    if result.cursor.is_idle() {
        println!("{}", "Nothing to navigate.".yellow());
        return Ok(());
    }
    println!("Commands: {} next, {} previous, {} hide evidence, {} quit", "n".bold(), "p".bold(), "h".bold(), "q".bold());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{} > ", result.cursor);
    stdout.flush()?;

    for line in stdin.lock().lines() {
        match line?.trim() {
            "n" => {
                result.cursor.next();
                print_current(&record, &result, context);
            }
            "p" => {
                result.cursor.prev();
                print_current(&record, &result, context);
            }
            "h" => {
                result.cursor.clear();
                println!("{}", "Evidence hidden.".dimmed());
                return Ok(());
            }
            "q" => return Ok(()),
            "" => {}
            other => println!("Unknown command: {}", other),
        }
        print!("{} > ", result.cursor);
        stdout.flush()?;
    }

    println!();
    Ok(())
}

fn print_current(record: &PatientRecord, result: &HighlightResult, context: usize) {
    let (Some(span_ref), Some((doc, span))) = (result.cursor.current(), result.current_span()) else {
        return;
    };
    let Some(note) = record.notes.get(span_ref.doc_index) else {
        return;
    };

    let (before, hit, after) = snippet(&note.text, span, context);
    println!(
        "{} {} @{}",
        doc.doc_id.cyan().bold(),
        note.display_type().white(),
        span.start
    );
    println!(
        "  …{}{}{}…",
        before.replace('\n', " "),
        hit.replace('\n', " ").black().on_yellow(),
        after.replace('\n', " ")
    );
    println!("  {}", span.claims_label().dimmed());
}
