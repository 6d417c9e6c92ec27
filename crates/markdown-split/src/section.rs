use crate::split::trim_blank;

/// One heading-delimited span of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Heading line, blank line and body, with a single trailing newline.
    pub fn render(&self) -> String {
        let mut content = format!("## {}", self.title);
        if !self.body.is_empty() {
            content.push_str("\n\n");
            content.push_str(&self.body);
        }

        let mut rendered = trim_blank(&content).to_string();
        rendered.push('\n');
        rendered
    }
}

/// Separates a split part into its first-line title and the remaining body.
pub fn parse_section(part: &str) -> Section {
    let mut lines = trim_blank(part).split('\n');
    let title = trim_blank(lines.next().unwrap_or_default()).to_string();
    let body = trim_blank(&lines.collect::<Vec<_>>().join("\n")).to_string();

    Section { title, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_and_body() {
        let section = parse_section("  A title \n\nfirst\n\nsecond\n\n");
        assert_eq!(section.title, "A title");
        assert_eq!(section.body, "first\n\nsecond");
    }

    #[test]
    fn body_may_be_empty() {
        let section = parse_section("Only heading\n");
        assert_eq!(section.title, "Only heading");
        assert_eq!(section.body, "");
        assert_eq!(section.render(), "## Only heading\n");
    }

    #[test]
    fn information_separators_are_trimmed() {
        let section = parse_section("\u{1e}Title\u{1f}\nbody\u{1c}\n");
        assert_eq!(section.title, "Title");
        assert_eq!(section.body, "body");
    }

    #[test]
    fn blank_part_has_no_title() {
        assert!(!parse_section(" \n\t").has_title());
    }

    #[test]
    fn renders_heading_blank_line_and_body() {
        let section = parse_section("A\nbody1\n\n");
        assert_eq!(section.render(), "## A\n\nbody1\n");
    }

    #[test]
    fn keeps_inner_body_indentation() {
        let section = parse_section("A\ntext\n    indented\n");
        assert_eq!(section.render(), "## A\n\ntext\n    indented\n");
    }
}
