//! Docs phase: document-level issues in linked docs and the docs tree.

use super::base::Detector;
use crate::config::Thresholds;
use crate::error::Result;
use crate::markdown::{self, read_document, Document};
use crate::models::{Finding, FindingKind, Phase, Severity};
use crate::project::ProjectContext;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Detects headerless and oversized documents
#[derive(Debug, Default)]
pub struct DocsDetector {
    thresholds: Thresholds,
}

impl DocsDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Linked `.md` targets in link order, then the docs tree, each once
    fn candidates(ctx: &ProjectContext) -> Vec<PathBuf> {
        let linked = ctx
            .distinct_link_targets()
            .into_iter()
            .filter(|p| p.to_string_lossy().ends_with(".md"))
            .map(Path::to_path_buf);

        let mut seen = HashSet::new();
        linked
            .chain(ctx.docs_files())
            .filter(|p| seen.insert(p.clone()))
            .collect()
    }

    /// Rules for one document, in emission order
    pub fn analyze(&self, content: &str, file: &Path) -> Vec<Finding> {
        let mut findings = Vec::new();
        if !markdown::starts_with_heading(content) {
            findings.push(Finding::new(
                FindingKind::HeaderlessDoc,
                Severity::Medium,
                file,
                1,
                "Document does not start with a heading",
            ));
        }
        let lines = markdown::line_count(content);
        if lines >= self.thresholds.fat_doc_lines {
            findings.push(Finding::new(
                FindingKind::FatDoc,
                Severity::Medium,
                file,
                1,
                format!("Document is {} lines; consider splitting", lines),
            ));
        }
        findings
    }
}

impl Detector for DocsDetector {
    fn name(&self) -> &'static str {
        "DocsDetector"
    }

    fn description(&self) -> &'static str {
        "Detects headerless and fat documents among linked docs and the docs tree"
    }

    fn phase(&self) -> Phase {
        Phase::Docs
    }

    fn detect(&self, ctx: &ProjectContext) -> Result<Vec<Finding>> {
        let candidates = Self::candidates(ctx);
        debug!("Docs phase: {} candidate documents", candidates.len());

        let mut findings = Vec::new();
        for path in &candidates {
            match read_document(path) {
                Ok(Document::Text(content)) => findings.extend(self.analyze(&content, path)),
                Ok(_) => {}
                Err(e) => warn!("Skipping document: {}", e),
            }
        }
        Ok(findings)
    }
}
