//! stager - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stager::git::{open_repo, staged_paths};
use stager::message::CommitSummary;

/// Generate a conventional commit message from staged files.
#[derive(Parser, Debug)]
#[command(name = "stager")]
#[command(about = "Generate a conventional commit message from staged files")]
#[command(long_about = "Generate a conventional commit message from staged files.\n\n\
    Output is suitable for: git commit -m \"$(stager)\"")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays clean for the message
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Step 1: Open git repository
    let repo = open_repo()
        .context("Not a git repository. Run stager from within a git repository.")?;

    // Step 2: Enumerate staged files
    let staged = staged_paths(&repo).context("Failed to read staged files")?;

    // Step 3: Classify and aggregate
    let summary = CommitSummary::from_paths(&staged)?;

    // Step 4: Print the message
    println!("{}", summary.render());

    Ok(())
}
