//! Paragraph, heading and code fence segmentation.
//!
//! Lines inside fenced code blocks (delimiters included) are dropped before
//! paragraphs are formed, so a fence never splits or forms a paragraph.

use regex::Regex;
use std::sync::OnceLock;

static HEADING_PATTERN: OnceLock<Regex> = OnceLock::new();

fn heading_pattern() -> &'static Regex {
    HEADING_PATTERN.get_or_init(|| Regex::new(r"(?m)^#{1,3}\s+(.+)").expect("valid regex"))
}

/// A logical paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Trimmed lines joined with single spaces
    pub text: String,
    /// 1-based line of the first line in the original text
    pub start_line: usize,
}

impl Paragraph {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// `str::trim`, also dropping a byte order mark
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_blank)
}

/// Leading whitespace and byte order mark removed
pub fn trim_leading(text: &str) -> &str {
    text.trim_start_matches(is_blank)
}

/// Whether a line opens or closes a fenced code block
pub fn is_fence(line: &str) -> bool {
    trim_line(line).starts_with("```")
}

fn is_heading(trimmed: &str) -> bool {
    trimmed.starts_with('#')
}

/// Number of lines, counted as `\n`-separated segments
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Number of complete fenced code blocks (pairs of fence lines)
pub fn count_code_blocks(text: &str) -> usize {
    text.split('\n').filter(|line| is_fence(line)).count() / 2
}

/// Level 1-3 heading texts, in order
pub fn headings(text: &str) -> Vec<&str> {
    heading_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect()
}

/// Split `text` into paragraphs.
///
/// A paragraph is a maximal run of non-blank, non-heading lines outside
/// code fences. Blank lines and headings end the current paragraph.
pub fn segment_paragraphs(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Option<Paragraph> = None;
    let mut in_code_block = false;

    for (idx, line) in text.split('\n').enumerate() {
        if is_fence(line) {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }

        let trimmed = trim_line(line);
        if trimmed.is_empty() || is_heading(trimmed) {
            paragraphs.extend(current.take());
            continue;
        }

        match current.as_mut() {
            Some(para) => {
                para.text.push(' ');
                para.text.push_str(trimmed);
            }
            None => {
                current = Some(Paragraph {
                    text: trimmed.to_string(),
                    start_line: idx + 1,
                });
            }
        }
    }

    paragraphs.extend(current);
    paragraphs
}
