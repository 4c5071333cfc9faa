use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use list_distance::{CLIArgs, Part};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CLIArgs::parse();
    let part = Part::try_from(args.part).context("Failed to select which part to solve.")?;
    let (mut left, mut right) = match &args.input_path {
        Some(path) => list_distance::read_lists(path)?,
        None => list_distance::parse_lists(io::stdin().lock())
            .context("Failed to read location ID lists from standard input.")?,
    };

    info!(?part, pairs = left.len(), "Solving.");
    let output = list_distance::solve(part, &mut left, &mut right)
        .with_context(|| format!("Failed to solve {:?} part.", part))?;
    info!(output, "Solved.");
    println!("Output: {}", output);

    Ok(())
}
