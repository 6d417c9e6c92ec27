use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use markdown_split::{run, should_ignore_pipe_error, SplitOptions};
use tracing_subscriber::EnvFilter;

/// Split `kokoelma.md` into one text file per `## ` section under `texts/`
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let options = SplitOptions::default();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    run(&options, &mut handle).with_context(|| {
        format!(
            "Unable to split {} into {}",
            options.input.display(),
            options.output_dir.display()
        )
    })?;

    match handle.flush() {
        Ok(()) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("Failed to flush stdout"),
    }
}
