//! Restricted glob matching for ignore patterns.
//!
//! Supported wildcards:
//! - `*`  any run of characters except `/`
//! - `?`  exactly one character except `/`
//! - `**` any number of path segments; `**/` means "zero or more full
//!   segments followed by `/`"
//!
//! Every other character is literal. Matches are anchored to the whole
//! path, and `\` is treated as `/` on both sides.

use regex::Regex;
use std::path::Path;
use tracing::debug;

/// A compiled glob pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    regex: Regex,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let normalized = pattern.replace('\\', "/");
        let regex = Regex::new(&glob_to_regex(&normalized))?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(&path.replace('\\', "/"))
    }
}

/// Match `path` against `pattern` (compiled per call).
pub fn match_glob(path: &str, pattern: &str) -> bool {
    match GlobPattern::new(pattern) {
        Ok(glob) => glob.is_match(path),
        Err(e) => {
            debug!("Unusable glob pattern {:?}: {}", pattern, e);
            false
        }
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut re = String::with_capacity(pattern.len() * 2 + 2);
    re.push('^');

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    re.push_str("(?:.+/)?");
                    i += 3;
                } else {
                    re.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                re.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                re.push_str("[^/]");
                i += 1;
            }
            c => {
                let mut buf = [0u8; 4];
                re.push_str(&regex::escape(c.encode_utf8(&mut buf)));
                i += 1;
            }
        }
    }

    re.push('$');
    re
}

/// A set of ignore globs, compiled once and matched against root-relative paths
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<GlobPattern>,
}

impl IgnoreSet {
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match GlobPattern::new(p) {
                Ok(glob) => Some(glob),
                Err(e) => {
                    debug!("Skipping unusable ignore pattern {:?}: {}", p, e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    /// Whether `file` (absolute) is ignored relative to `root`
    pub fn is_ignored(&self, file: &Path, root: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let rel = crate::paths::relative_slash_path(file, root);
        self.patterns.iter().any(|p| p.is_match(&rel))
    }
}

/// Whether `file` should be skipped under `ignore_patterns`
pub fn should_ignore(file: &Path, root: &Path, ignore_patterns: &[String]) -> bool {
    IgnoreSet::new(ignore_patterns).is_ignored(file, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_wildcard() {
        assert!(match_glob("foo.md", "*.md"));
        assert!(!match_glob("foo.txt", "*.md"));
        assert!(!match_glob("docs/foo.md", "*.md"));
    }

    #[test]
    fn test_double_star_suffix() {
        assert!(match_glob("docs/plans/v1.md", "docs/plans/**"));
        assert!(match_glob("docs/plans/deep/nested.md", "docs/plans/**"));
        assert!(!match_glob("docs/conventions.md", "docs/plans/**"));
    }

    #[test]
    fn test_double_star_segment() {
        assert!(match_glob("src/a/b.test.mjs", "src/**/*.test.mjs"));
        assert!(match_glob("src/b.test.mjs", "src/**/*.test.mjs"));
        assert!(!match_glob("src/a/b.mjs", "src/**/*.test.mjs"));
    }

    #[test]
    fn test_question_mark() {
        assert!(match_glob("doc1.md", "doc?.md"));
        assert!(!match_glob("doc12.md", "doc?.md"));
        assert!(!match_glob("doc/.md", "doc?.md"));
    }

    #[test]
    fn test_dot_is_literal() {
        assert!(!match_glob("fooxmd", "foo.md"));
        assert!(match_glob("foo.md", "foo.md"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert!(match_glob("notes (draft)+[1].md", "notes (draft)+[1].md"));
        assert!(!match_glob("notes draft.md", "notes (draft)?.md"));
        assert!(match_glob("a$b^c|d.md", "a$b^c|d.md"));
    }

    #[test]
    fn test_anchored_whole_path() {
        assert!(!match_glob("docs/plans/v1.md.bak", "docs/plans/*.md"));
        assert!(!match_glob("x/docs/plans/v1.md", "docs/plans/*.md"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(match_glob("", ""));
        assert!(!match_glob("a", ""));
    }

    #[test]
    fn test_literal_reflexive() {
        for s in ["CLAUDE.md", "docs/a-b_c.md", "weird {name}.md", ""] {
            assert!(match_glob(s, s), "{s:?} should match itself");
        }
    }

    #[test]
    fn test_backslashes_normalized() {
        assert!(match_glob("docs\\plans\\v1.md", "docs/plans/**"));
        assert!(match_glob("docs/plans/v1.md", "docs\\plans\\*.md"));
    }

    #[test]
    fn test_should_ignore() {
        let root = Path::new("/project");
        assert!(!should_ignore(Path::new("/project/docs/foo.md"), root, &[]));
        assert!(should_ignore(
            Path::new("/project/docs/plans/v1.md"),
            root,
            &["docs/plans/**".to_string()]
        ));
        assert!(!should_ignore(
            Path::new("/project/docs/conventions.md"),
            root,
            &["docs/plans/**".to_string()]
        ));
    }
}
