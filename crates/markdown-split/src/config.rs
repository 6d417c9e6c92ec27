use std::path::PathBuf;

/// Markdown collection read from the working directory.
pub const INPUT_MD: &str = "kokoelma.md";

/// Directory that receives one text file per section.
pub const OUTPUT_DIR: &str = "texts";

/// Maximum number of characters kept from a heading when building a filename.
pub const MAX_SLUG_LEN: usize = 50;

/// Locations and limits used by a single split run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub max_slug_len: usize,
}

impl SplitOptions {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            max_slug_len: MAX_SLUG_LEN,
        }
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self::new(INPUT_MD, OUTPUT_DIR)
    }
}
