use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flashcards::cli::Session;
use flashcards::config::{normalize_legacy_args, Args, Settings};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is the user dialogue
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flashcards=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse_from(normalize_legacy_args(std::env::args_os()));
    let settings = Settings::from_args(args).context("Invalid command-line configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), settings);
    session.run().context("Flashcard session failed")?;

    Ok(())
}
