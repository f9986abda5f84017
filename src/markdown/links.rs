//! Relative link extraction and resolution.

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static LINK_PATTERN: OnceLock<Regex> = OnceLock::new();

fn link_pattern() -> &'static Regex {
    LINK_PATTERN.get_or_init(|| Regex::new(r"\[.*?\]\((.*?)\)").expect("valid regex"))
}

fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Targets of inline `[label](target)` links that are not http(s) URLs,
/// in order of appearance. Duplicates are kept.
pub fn extract_relative_links(text: &str) -> Vec<String> {
    link_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|target| !is_url(target))
        .map(str::to_string)
        .collect()
}

/// A link target as written plus its absolute location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub raw: String,
    pub absolute: PathBuf,
}

/// Resolve each target against `root`, preserving order and duplicates.
pub fn resolve_links(root: &Path, links: &[String]) -> Vec<ResolvedLink> {
    links
        .iter()
        .map(|raw| ResolvedLink {
            raw: raw.clone(),
            absolute: crate::paths::resolve(root, raw),
        })
        .collect()
}

/// 1-based line of the first line containing `needle` verbatim, or 1.
pub fn first_line_containing(text: &str, needle: &str) -> usize {
    text.split('\n')
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
        .unwrap_or(1)
}
