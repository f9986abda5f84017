//! Directive statement extraction.

use crate::markdown::{is_fence, trim_line};
use regex::Regex;
use std::sync::OnceLock;

/// Lines shorter than this are never treated as directives
const MIN_STATEMENT_CHARS: usize = 10;

static LINK_ONLY: OnceLock<Regex> = OnceLock::new();

/// A line holding nothing but one markdown link, e.g. `- See [guide](docs/guide.md).`
fn link_only() -> &'static Regex {
    LINK_ONLY.get_or_init(|| {
        Regex::new(r"^\s*(?:[-*]?\s*)?(?:See\s+)?\[.*?\]\(.*?\)\.?\s*$").expect("valid regex")
    })
}

/// Directive statements of a markdown document, trimmed, in order.
///
/// Skips fenced code (delimiters included), blank lines, headings, lines
/// under ten characters and link-only lines.
pub fn extract_statements(text: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut in_code_block = false;

    for line in text.split('\n') {
        if is_fence(line) {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }

        let trimmed = trim_line(line);
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.chars().count() < MIN_STATEMENT_CHARS
            || link_only().is_match(trimmed)
        {
            continue;
        }
        statements.push(trimmed.to_string());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_bare_link_only() {
        assert!(extract_statements("# Title\n[guide](docs/guide.md)\n").is_empty());
    }

    #[test]
    fn test_short_line_dropped() {
        let text = "short\nUse pnpm for package management.\n";
        assert_eq!(extract_statements(text), vec!["Use pnpm for package management."]);
    }

    #[test]
    fn test_code_blocks_skipped() {
        let text = "```bash\nnpm run build --production\n```\nRun the linter before pushing.\n";
        assert_eq!(extract_statements(text), vec!["Run the linter before pushing."]);
    }

    #[test]
    fn test_link_only_variants() {
        let text = "- See [conventions](docs/conventions.md).\n* [api](docs/api.md)\nSee [x](y) for the full list of rules\n";
        // trailing prose keeps the last line
        assert_eq!(
            extract_statements(text),
            vec!["See [x](y) for the full list of rules"]
        );
    }

    #[test]
    fn test_lines_are_trimmed() {
        assert_eq!(
            extract_statements("   Prefer small pull requests.   \n"),
            vec!["Prefer small pull requests."]
        );
    }

    #[test]
    fn test_bom_prefixed_heading_skipped() {
        assert_eq!(
            extract_statements("\u{feff}# Project Guide\nPrefer small pull requests.\n"),
            vec!["Prefer small pull requests."]
        );
    }
}
