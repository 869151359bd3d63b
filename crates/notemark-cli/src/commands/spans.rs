//! Spans command - list highlighted spans in navigation order.

use colored::Colorize;

use super::{load, print_diagnostics};
use crate::cli::InputArgs;

pub fn run(input: InputArgs, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, result) = load(&input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let total = result.cursor.total();
    if total == 0 {
        println!("{}", "No evidence found in these notes.".yellow());
    }

    for (i, (doc, span)) in result.spans().enumerate() {
        println!(
            "{:>4} of {}  {} {}..{}  \"{}\"",
            (i + 1).to_string().white().bold(),
            total,
            doc.doc_id.cyan(),
            span.start,
            span.end,
            span.text.replace('\n', " ")
        );
        println!("        {}", span.claims_label().dimmed());
    }

    println!();
    print_diagnostics(&result.diagnostics, verbose);

    Ok(())
}
