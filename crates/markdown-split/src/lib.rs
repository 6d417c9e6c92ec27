//! Splits a markdown collection into one text file per `## ` section.
//!
//! The pipeline reads the whole document, normalises line endings, cuts it at
//! every line-start `##` marker, and writes each titled section to
//! `NNN_<slug>.txt` in the output directory.

mod config;
mod error;
mod output;
mod progress;
mod sanitize;
mod section;
mod split;

pub use config::{SplitOptions, INPUT_MD, MAX_SLUG_LEN, OUTPUT_DIR};
pub use error::{SplitError, SplitResult};
pub use output::{file_name, plan_outputs, OutputFile};
pub use progress::should_ignore_pipe_error;
pub use sanitize::make_safe_filename;
pub use section::{parse_section, Section};
pub use split::{normalize_line_endings, split_document, split_parts};

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use progress::Progress;
use tracing::{info, warn};

/// How a run ended when no error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The input file does not exist; nothing was written.
    MissingInput(PathBuf),
    /// The document holds no non-blank section; nothing was written.
    NoSections,
    /// Paths of the files written, in document order.
    Written(Vec<PathBuf>),
}

/// Runs the whole pipeline for `options`, printing progress lines to `out`.
///
/// Once `out` reports a broken pipe, progress output stops but every section
/// is still written.
pub fn run<W: Write>(options: &SplitOptions, out: &mut W) -> SplitResult<SplitOutcome> {
    let mut progress = Progress::new(out);

    if !options.input.exists() {
        warn!(input = %options.input.display(), "input file not found");
        progress.line(format_args!(
            "File '{}' not found. Check the name and location.",
            options.input.display()
        ))?;
        return Ok(SplitOutcome::MissingInput(options.input.clone()));
    }

    let raw = fs::read_to_string(&options.input).map_err(|source| SplitError::Read {
        path: options.input.clone(),
        source,
    })?;
    let normalized = normalize_line_endings(&raw);

    let mut outputs = plan_outputs(&normalized, options).peekable();
    if outputs.peek().is_none() {
        warn!(input = %options.input.display(), "no headed sections found");
        progress.line(format_args!(
            "No headed sections found. Make sure headings start at the beginning of a line with '## '."
        ))?;
        return Ok(SplitOutcome::NoSections);
    }

    output::ensure_dir(&options.output_dir)?;

    let mut written = Vec::new();
    for file in outputs {
        file.write()?;
        info!(path = %file.path.display(), sequence = file.sequence, "wrote section");
        progress.line(format_args!("Created: {}", file.path.display()))?;
        written.push(file.path);
    }

    progress.line(format_args!(
        "\nDone. Created {} texts in '{}/'.",
        written.len(),
        options.output_dir.display()
    ))?;

    Ok(SplitOutcome::Written(written))
}
