use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// A `##` marker plus the whitespace after it, at the start of any line.
/// The information separators U+001C..U+001F count as whitespace here.
static HEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##[\s\x1C-\x1F]+").expect("heading marker pattern is valid")
});

/// Unicode whitespace plus the information separators U+001C..U+001F.
pub(crate) fn is_blank_char(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Yields the non-blank parts of already normalised `text`, in order.
///
/// The marker is consumed, so each part starts with the heading text. A
/// non-blank preamble before the first heading survives as its own part.
pub fn split_parts(text: &str) -> impl Iterator<Item = &str> + '_ {
    HEADING_MARKER
        .split(text)
        .filter(|part| !trim_blank(part).is_empty())
}

/// Normalises line endings and splits a document at every level-two heading marker.
pub fn split_document(text: &str) -> Vec<String> {
    let normalized = normalize_line_endings(text);
    let parts: Vec<String> = split_parts(&normalized).map(str::to_string).collect();

    debug!(parts = parts.len(), "split document at heading markers");
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_crlf_and_lone_cr() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn splits_on_line_start_markers_only() {
        let parts = split_document("## A\nbody ## not a heading\n## B\nmore");
        assert_eq!(parts, vec!["A\nbody ## not a heading\n", "B\nmore"]);
    }

    #[test]
    fn ignores_deeper_and_unspaced_markers() {
        let parts = split_document("## A\n### Sub\n##NoSpace\n");
        assert_eq!(parts, vec!["A\n### Sub\n##NoSpace\n"]);
    }

    #[test]
    fn drops_blank_preamble() {
        let parts = split_document("  \n\n## A\nbody");
        assert_eq!(parts, vec!["A\nbody"]);
    }

    #[test]
    fn keeps_non_blank_preamble() {
        let parts = split_document("Intro line\nmore\n## A\nbody");
        assert_eq!(parts, vec!["Intro line\nmore\n", "A\nbody"]);
    }

    #[test]
    fn marker_whitespace_may_span_lines() {
        let parts = split_document("##\n\nTitle\nbody");
        assert_eq!(parts, vec!["Title\nbody"]);
    }

    #[test]
    fn information_separators_count_as_blank() {
        let parts = split_document("## \u{1f}\n## B\nx");
        assert_eq!(parts, vec!["B\nx"]);
        assert_eq!(trim_blank("\u{1c} a \u{1d}\n"), "a");
    }

    #[test]
    fn returns_nothing_without_content() {
        assert!(split_document("").is_empty());
        assert!(split_document("## \n##   \n").is_empty());
    }
}
