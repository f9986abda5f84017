//! Classification rules shared by the CCS scorer and the detectors.

use crate::config::Thresholds;
use crate::markdown::{count_code_blocks, segment_paragraphs};
use regex::Regex;
use std::sync::OnceLock;

/// A responsibility a heading can signal
#[derive(Debug, Clone, Copy)]
pub struct RoleCategory {
    pub label: &'static str,
    /// Case-insensitive substrings
    pub keywords: &'static [&'static str],
}

/// Categories counted by the CCS `role_mixing` factor
pub const SCORING_ROLES: &[RoleCategory] = &[
    RoleCategory { label: "architecture", keywords: &["architect"] },
    RoleCategory { label: "style", keywords: &["style"] },
    RoleCategory { label: "testing", keywords: &["test"] },
    RoleCategory { label: "deploy", keywords: &["deploy"] },
    RoleCategory { label: "tooling", keywords: &["tool"] },
    RoleCategory { label: "api", keywords: &["api"] },
    RoleCategory { label: "git/ci", keywords: &["git", "ci", "workflow"] },
    RoleCategory { label: "security/devops", keywords: &["security", "infra", "devops"] },
    RoleCategory { label: "conventions", keywords: &["convention"] },
];

/// Categories reported by the structure phase `role_mixing` finding
pub const DETECTOR_ROLES: &[RoleCategory] = &[
    RoleCategory { label: "style/naming", keywords: &["style", "naming", "convention"] },
    RoleCategory { label: "tools/build", keywords: &["tool", "build"] },
    RoleCategory { label: "rules/behavior", keywords: &["rule", "behavior", "behaviour"] },
    RoleCategory { label: "architecture/design", keywords: &["architect", "design"] },
    RoleCategory { label: "testing", keywords: &["test"] },
    RoleCategory { label: "deployment", keywords: &["deploy"] },
    RoleCategory { label: "api", keywords: &["api"] },
    RoleCategory { label: "git", keywords: &["git"] },
];

impl RoleCategory {
    pub fn matches(&self, heading: &str) -> bool {
        let lower = heading.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

/// Distinct category labels matched by any heading, in table order
pub fn matched_roles(headings: &[&str], table: &[RoleCategory]) -> Vec<&'static str> {
    table
        .iter()
        .filter(|cat| headings.iter().any(|h| cat.matches(h)))
        .map(|cat| cat.label)
        .collect()
}

static TOOL_FORCING: OnceLock<Regex> = OnceLock::new();

fn tool_forcing_pattern() -> &'static Regex {
    TOOL_FORCING.get_or_init(|| Regex::new(r"(?i)\b(?:always use|must use)\b").expect("valid regex"))
}

/// Whether the text mandates a tool anywhere ("always use" / "must use")
pub fn has_tool_forcing(text: &str) -> bool {
    tool_forcing_pattern().is_match(text)
}

/// `(1-based line, line)` for every line that mandates a tool
pub fn tool_forcing_lines(text: &str) -> Vec<(usize, &str)> {
    text.split('\n')
        .enumerate()
        .filter(|(_, line)| tool_forcing_pattern().is_match(line))
        .map(|(i, line)| (i + 1, line))
        .collect()
}

/// Inline content weight of an index document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLoad {
    pub code_blocks: usize,
    pub long_paragraphs: usize,
}

impl ContentLoad {
    pub fn measure(text: &str, thresholds: &Thresholds) -> Self {
        let long_paragraphs = segment_paragraphs(text)
            .iter()
            .filter(|p| p.char_count() >= thresholds.long_paragraph_chars)
            .count();
        Self {
            code_blocks: count_code_blocks(text),
            long_paragraphs,
        }
    }

    /// Content that belongs in linked docs rather than the index
    pub fn leaks(&self, thresholds: &Thresholds) -> bool {
        self.code_blocks >= thresholds.code_block_leak
            || self.long_paragraphs >= thresholds.long_paragraph_leak
    }
}
