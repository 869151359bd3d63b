//! Notemark CLI - browse evidence highlights in clinical notes.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Show {
            input,
            note,
            no_color,
        } => commands::show::run(input, note, no_color, cli.verbose),

        Commands::Spans { input, json } => commands::spans::run(input, json, cli.verbose),

        Commands::Navigate { input, context } => {
            commands::navigate::run(input, context, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
