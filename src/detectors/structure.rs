//! Structure phase: anti-patterns inside the context file itself.
//!
//! Rules run in a fixed order and each returns its own findings:
//! monolith, role mixing, tool forcing, directory dump, lint dump,
//! philosophy essay, index content leak.

use super::base::{display_name, Detector};
use crate::config::Thresholds;
use crate::error::Result;
use crate::markdown::{headings, line_count, segment_paragraphs, Paragraph};
use crate::models::{Finding, FindingKind, Phase, Severity};
use crate::project::ProjectContext;
use crate::rules::{self, ContentLoad, DETECTOR_ROLES};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

static TREE_CHARS: OnceLock<Regex> = OnceLock::new();
static LINT_RULES: OnceLock<Regex> = OnceLock::new();
static ABSTRACT_LANGUAGE: OnceLock<Regex> = OnceLock::new();

fn tree_chars() -> &'static Regex {
    TREE_CHARS.get_or_init(|| Regex::new(r"[├└│─]").expect("valid regex"))
}

fn lint_rules() -> &'static Regex {
    LINT_RULES.get_or_init(|| {
        Regex::new(
            r"\b(?:no-unused-vars|no-console|semi|quotes|indent|eqeqeq|eslint-disable|eslint-enable)\b|@typescript-eslint/[\w-]+",
        )
        .expect("valid regex")
    })
}

fn abstract_language() -> &'static Regex {
    ABSTRACT_LANGUAGE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(?:philosophy|principle|believe|vision|paradigm|ethos|fundamental|holistic|comprehensive)\b",
        )
        .expect("valid regex")
    })
}

/// Detects structural anti-patterns in the context file
#[derive(Debug, Default)]
pub struct StructureDetector {
    thresholds: Thresholds,
}

impl StructureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// All structure rules over one document, in emission order
    pub fn analyze(&self, content: &str, file: &Path) -> Vec<Finding> {
        let name = display_name(file);
        let paragraphs = segment_paragraphs(content);
        let t = &self.thresholds;

        let mut findings = Vec::new();
        findings.extend(monolith(content, file, &name, t));
        findings.extend(role_mixing(content, file, &name, t));
        findings.extend(tool_forcing(content, file));
        findings.extend(directory_dump(content, file, t));
        findings.extend(lint_dump(content, file, t));
        findings.extend(philosophy_essays(&paragraphs, file, t));
        findings.extend(index_content_leak(content, file, t));
        findings
    }
}

impl Detector for StructureDetector {
    fn name(&self) -> &'static str {
        "StructureDetector"
    }

    fn description(&self) -> &'static str {
        "Detects monoliths, role mixing, tool forcing and inline content dumps in the context file"
    }

    fn phase(&self) -> Phase {
        Phase::Structure
    }

    fn detect(&self, ctx: &ProjectContext) -> Result<Vec<Finding>> {
        let findings = self.analyze(&ctx.content, &ctx.context_path);
        debug!("Structure phase: {} findings", findings.len());
        Ok(findings)
    }
}

fn monolith(content: &str, file: &Path, name: &str, t: &Thresholds) -> Option<Finding> {
    let lines = line_count(content);
    (lines >= t.monolith_lines).then(|| {
        Finding::new(
            FindingKind::Monolith,
            Severity::High,
            file,
            1,
            format!("{} is {} lines; consider splitting into focused docs", name, lines),
        )
    })
}

fn role_mixing(content: &str, file: &Path, name: &str, t: &Thresholds) -> Option<Finding> {
    let roles = rules::matched_roles(&headings(content), DETECTOR_ROLES);
    (roles.len() >= t.role_categories).then(|| {
        Finding::new(
            FindingKind::RoleMixing,
            Severity::Medium,
            file,
            1,
            format!("{} mixes {} roles: {}", name, roles.len(), roles.join(", ")),
        )
    })
}

fn tool_forcing(content: &str, file: &Path) -> Vec<Finding> {
    rules::tool_forcing_lines(content)
        .into_iter()
        .map(|(line, text)| {
            Finding::new(
                FindingKind::ToolForcing,
                Severity::Medium,
                file,
                line,
                format!("Tool forcing: \"{}\"", text.trim()),
            )
        })
        .collect()
}

fn directory_dump(content: &str, file: &Path, t: &Thresholds) -> Option<Finding> {
    let tree_lines: Vec<usize> = content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| tree_chars().is_match(line))
        .map(|(i, _)| i + 1)
        .collect();
    let first = *tree_lines.first()?;
    (tree_lines.len() >= t.directory_dump_lines).then(|| {
        Finding::new(
            FindingKind::DirectoryDump,
            Severity::Low,
            file,
            first,
            format!("Directory tree dump detected ({} tree-output lines)", tree_lines.len()),
        )
    })
}

fn lint_dump(content: &str, file: &Path, t: &Thresholds) -> Option<Finding> {
    let count = lint_rules().find_iter(content).count();
    (count >= t.lint_dump_matches).then(|| {
        Finding::new(
            FindingKind::LintDump,
            Severity::Low,
            file,
            1,
            format!("{} lint rule references found; consider linking to the lint config", count),
        )
    })
}

fn philosophy_essays(paragraphs: &[Paragraph], file: &Path, t: &Thresholds) -> Vec<Finding> {
    paragraphs
        .iter()
        .filter(|p| p.char_count() >= t.essay_chars && abstract_language().is_match(&p.text))
        .map(|p| {
            Finding::new(
                FindingKind::PhilosophyEssay,
                Severity::Low,
                file,
                p.start_line,
                format!("Long abstract paragraph ({} chars); move to a design doc", p.char_count()),
            )
        })
        .collect()
}

fn index_content_leak(content: &str, file: &Path, t: &Thresholds) -> Option<Finding> {
    let load = ContentLoad::measure(content, t);
    load.leaks(t).then(|| {
        Finding::new(
            FindingKind::IndexContentLeak,
            Severity::High,
            file,
            1,
            format!(
                "Index file contains heavy content ({} code blocks, {} long paragraphs)",
                load.code_blocks, load.long_paragraphs
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(content: &str) -> Vec<Finding> {
        StructureDetector::new().analyze(content, Path::new("/p/CLAUDE.md"))
    }

    fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
        findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_clean_file_has_no_findings() {
        assert!(analyze("# Project\n\nSee [docs](docs/a.md).\n").is_empty());
    }

    #[test]
    fn test_monolith() {
        let content = "line\n".repeat(300);
        let findings = analyze(&content);
        assert_eq!(kinds(&findings), vec![FindingKind::Monolith]);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(
            findings[0].message,
            "CLAUDE.md is 301 lines; consider splitting into focused docs"
        );
    }

    #[test]
    fn test_role_mixing_lists_labels() {
        let findings = analyze("# Naming\n## Build\n## Testing\n");
        assert_eq!(kinds(&findings), vec![FindingKind::RoleMixing]);
        assert_eq!(
            findings[0].message,
            "CLAUDE.md mixes 3 roles: style/naming, tools/build, testing"
        );
    }

    #[test]
    fn test_tool_forcing_per_line() {
        let findings = analyze("# P\n  Always use pnpm.  \nok\nYou MUST USE tabs\n");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].line, 2);
        assert_eq!(findings[0].message, "Tool forcing: \"Always use pnpm.\"");
        assert_eq!(findings[1].line, 4);
    }

    #[test]
    fn test_directory_dump_reports_first_tree_line() {
        let content = "# Layout\n\nsrc/\n├── a\n├── b\n│   └── c\n├── d\n└── e\n";
        let findings = analyze(content);
        assert_eq!(kinds(&findings), vec![FindingKind::DirectoryDump]);
        assert_eq!(findings[0].line, 4);
        assert!(findings[0].message.contains("5 tree-output lines"));

        let short = "├── a\n└── b\n";
        assert!(analyze(short).is_empty());
    }

    #[test]
    fn test_lint_dump() {
        let content = "# Lint\nno-console, semi, quotes, eqeqeq\n@typescript-eslint/no-explicit-any\n";
        let findings = analyze(content);
        assert_eq!(kinds(&findings), vec![FindingKind::LintDump]);
        assert!(findings[0].message.starts_with("5 lint rule references"));
    }

    #[test]
    fn test_philosophy_essay_needs_length_and_abstract_language() {
        let essay = format!("Our philosophy is simple. {}", "words ".repeat(100));
        let findings = analyze(&format!("# Why\n\n{}\n", essay));
        assert_eq!(kinds(&findings), vec![FindingKind::PhilosophyEssay]);
        assert_eq!(findings[0].line, 3);

        // long but concrete
        let concrete = "words ".repeat(100);
        assert!(analyze(&format!("# Why\n\n{}\n", concrete))
            .iter()
            .all(|f| f.kind != FindingKind::PhilosophyEssay));
    }

    #[test]
    fn test_index_content_leak() {
        let content = "# P\n```\na\n```\n```\nb\n```\n```\nc\n```\n";
        let findings = analyze(content);
        assert_eq!(kinds(&findings), vec![FindingKind::IndexContentLeak]);
        assert_eq!(
            findings[0].message,
            "Index file contains heavy content (3 code blocks, 0 long paragraphs)"
        );
    }

    #[test]
    fn test_rule_order() {
        let mut content = String::from("# Style\n## Tools\n## Testing\nAlways use make\n");
        content.push_str(&"x\n".repeat(300));
        let findings = analyze(&content);
        assert_eq!(
            kinds(&findings),
            vec![FindingKind::Monolith, FindingKind::RoleMixing, FindingKind::ToolForcing]
        );
    }
}
