//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use notemark::{HighlightConfig, DEFAULT_SIZE_LIMIT};

/// Notemark: evidence highlighting for clinical notes
#[derive(Parser)]
#[command(name = "notemark")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print notes with evidence highlighted inline
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Only show the note with this id
        #[arg(long)]
        note: Option<String>,

        /// Mark highlights with brackets instead of color
        #[arg(long)]
        no_color: bool,
    },

    /// List every highlighted span in navigation order
    Spans {
        #[command(flatten)]
        input: InputArgs,

        /// Output the full highlight result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step through highlights interactively (n/p/h/q on stdin)
    Navigate {
        #[command(flatten)]
        input: InputArgs,

        /// Characters of context to show around the current span
        #[arg(short = 'C', long, default_value = "60")]
        context: usize,
    },
}

/// Input files and matching options shared by every command.
#[derive(Args)]
pub struct InputArgs {
    /// Notes file: a patient record or an array of notes (JSON)
    #[arg(value_name = "NOTES")]
    pub notes: PathBuf,

    /// Evidence file: an assistant message, evidence array, or claim triples (JSON)
    #[arg(value_name = "EVIDENCE")]
    pub evidence: PathBuf,

    /// Match letter case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Require whitespace in quotes to match the note exactly
    #[arg(long)]
    pub strict_whitespace: bool,

    /// Do not treat single and double quotes as interchangeable
    #[arg(long)]
    pub strict_quotes: bool,

    /// Compiled pattern size limit per note, in bytes
    #[arg(long, default_value_t = DEFAULT_SIZE_LIMIT)]
    pub size_limit: usize,
}

impl InputArgs {
    /// Matching configuration selected by the flags.
    pub fn config(&self) -> HighlightConfig {
        HighlightConfig::new()
            .with_case_insensitive(!self.case_sensitive)
            .with_flexible_whitespace(!self.strict_whitespace)
            .with_flexible_quotes(!self.strict_quotes)
            .with_size_limit(self.size_limit)
    }
}
