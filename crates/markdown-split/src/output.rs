use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SplitOptions;
use crate::error::{SplitError, SplitResult};
use crate::sanitize::make_safe_filename;
use crate::section::{parse_section, Section};
use crate::split::split_parts;

/// A text file derived from one titled section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub sequence: usize,
    pub path: PathBuf,
    pub content: String,
}

impl OutputFile {
    pub fn new(output_dir: &Path, sequence: usize, section: &Section, max_slug_len: usize) -> Self {
        let slug = make_safe_filename(&section.title, max_slug_len);
        Self {
            sequence,
            path: output_dir.join(file_name(sequence, &slug)),
            content: section.render(),
        }
    }

    /// Creates or truncates the target and writes the content as UTF-8.
    pub fn write(&self) -> SplitResult<()> {
        let write_err = |source| SplitError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&self.path).map_err(write_err)?;
        file.write_all(self.content.as_bytes()).map_err(write_err)?;
        Ok(())
    }
}

/// `NNN_slug.txt`, where the prefix widens past three digits when needed.
pub fn file_name(sequence: usize, slug: &str) -> String {
    format!("{sequence:03}_{slug}.txt")
}

/// Parses the parts of `text` lazily, numbering titled sections from 1 in document order.
///
/// `text` must already have `\n` line endings (see [`normalize_line_endings`]).
/// Each file is built only when the iterator reaches it.
///
/// [`normalize_line_endings`]: crate::normalize_line_endings
pub fn plan_outputs<'a>(
    text: &'a str,
    options: &'a SplitOptions,
) -> impl Iterator<Item = OutputFile> + 'a {
    split_parts(text)
        .map(parse_section)
        .filter(|section| {
            if !section.has_title() {
                debug!("skipping part without a title");
            }
            section.has_title()
        })
        .enumerate()
        .map(|(index, section)| {
            OutputFile::new(
                &options.output_dir,
                index + 1,
                &section,
                options.max_slug_len,
            )
        })
}

pub(crate) fn ensure_dir(path: &Path) -> SplitResult<()> {
    fs::create_dir_all(path).map_err(|source| SplitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
