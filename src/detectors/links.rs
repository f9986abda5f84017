//! Links phase: link integrity and orphaned docs.
//!
//! Both rules are capped; anything past the cap collapses into a single
//! info-severity overflow finding.

use super::base::{display_name, Detector};
use crate::bounded::cap_with_overflow;
use crate::config::Thresholds;
use crate::error::Result;
use crate::markdown::{first_line_containing, read_document, Document};
use crate::models::{Finding, FindingKind, Phase, Severity};
use crate::project::ProjectContext;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Detects broken relative links and docs nothing links to
#[derive(Debug, Default)]
pub struct LinksDetector {
    thresholds: Thresholds,
}

impl LinksDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// One finding per link occurrence whose target is missing
    fn broken_links(&self, ctx: &ProjectContext) -> Result<Vec<Finding>> {
        let mut missing: HashMap<&Path, bool> = HashMap::new();
        for path in ctx.distinct_link_targets() {
            missing.insert(path, matches!(read_document(path)?, Document::Missing));
        }

        let findings = ctx
            .links
            .iter()
            .filter(|link| missing.get(link.absolute.as_path()).copied().unwrap_or(false))
            .map(|link| {
                Finding::new(
                    FindingKind::BrokenLink,
                    Severity::High,
                    &ctx.context_path,
                    first_line_containing(&ctx.content, &link.raw),
                    format!("Broken link: {} does not exist", link.raw),
                )
            })
            .collect();

        Ok(cap_with_overflow(findings, self.thresholds.emission_cap, |dropped| {
            Finding::new(
                FindingKind::BrokenLinkOverflow,
                Severity::Info,
                &ctx.context_path,
                1,
                format!("{} more not shown", dropped),
            )
        }))
    }

    fn orphan_docs(&self, ctx: &ProjectContext) -> Vec<Finding> {
        let source = display_name(&ctx.context_path);
        let findings = ctx
            .orphan_docs()
            .into_iter()
            .map(|path| {
                let message = format!("{} is not linked from {}", display_name(&path), source);
                Finding::new(FindingKind::OrphanDoc, Severity::Medium, path, 1, message)
            })
            .collect();

        cap_with_overflow(findings, self.thresholds.emission_cap, |dropped| {
            Finding::new(
                FindingKind::OrphanDocOverflow,
                Severity::Info,
                ctx.docs_dir(),
                1,
                format!("{} more not shown", dropped),
            )
        })
    }
}

impl Detector for LinksDetector {
    fn name(&self) -> &'static str {
        "LinksDetector"
    }

    fn description(&self) -> &'static str {
        "Detects broken relative links and orphaned docs"
    }

    fn phase(&self) -> Phase {
        Phase::Links
    }

    fn detect(&self, ctx: &ProjectContext) -> Result<Vec<Finding>> {
        let mut findings = self.broken_links(ctx)?;
        findings.extend(self.orphan_docs(ctx));
        debug!("Links phase: {} findings", findings.len());
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::AnalysisOptions;
    use std::fs;

    fn load(dir: &Path) -> ProjectContext {
        ProjectContext::load(dir, &AnalysisOptions::default()).expect("context loads")
    }

    #[test]
    fn test_broken_link_line_and_message() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "# P\n\nRead [guide](docs/guide.md)\n").unwrap();

        let findings = LinksDetector::new().detect(&load(dir.path())).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::BrokenLink);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].line, 3);
        assert_eq!(findings[0].message, "Broken link: docs/guide.md does not exist");
    }

    #[test]
    fn test_existing_link_and_directory_link_are_fine() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/a.md"), "# A").unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "# P\n[a](docs/a.md) [d](docs)\n").unwrap();

        assert!(LinksDetector::new().detect(&load(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn test_orphan_message_names_context_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/lonely.md"), "# L").unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "# P\n").unwrap();

        let findings = LinksDetector::new().detect(&load(dir.path())).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::OrphanDoc);
        assert_eq!(findings[0].message, "lonely.md is not linked from CLAUDE.md");
    }

    #[test]
    fn test_broken_links_capped() {
        let dir = tempfile::tempdir().unwrap();
        let body: String = (0..12).map(|i| format!("[x](gone{}.md)\n", i)).collect();
        fs::write(dir.path().join("CLAUDE.md"), format!("# P\n{}", body)).unwrap();

        let findings = LinksDetector::new().detect(&load(dir.path())).unwrap();
        assert_eq!(findings.len(), 11);
        assert_eq!(findings[10].kind, FindingKind::BrokenLinkOverflow);
        assert_eq!(findings[10].severity, Severity::Info);
        assert_eq!(findings[10].message, "2 more not shown");
    }
}
