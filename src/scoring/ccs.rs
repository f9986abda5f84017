//! Context Complexity Score calculation.

use crate::bounded::cap_with_overflow;
use crate::config::Thresholds;
use crate::error::Result;
use crate::markdown::{self, headings, read_document, Document};
use crate::models::{AnalysisResult, Factor, FactorKind};
use crate::project::{AnalysisOptions, ProjectContext};
use crate::rules::{self, ContentLoad, SCORING_ROLES};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const MONOLITH_SCORE: u32 = 3;
const ROLE_MIXING_SCORE: u32 = 2;
const TOOL_FORCING_SCORE: u32 = 2;
const INDEX_CONTENT_LEAK_SCORE: u32 = 2;
const NO_DOCS_SEPARATION_SCORE: u32 = 1;
const BROKEN_LINK_SCORE: u32 = 2;
const HEADERLESS_DOC_SCORE: u32 = 1;
const FAT_DOC_SCORE: u32 = 2;
const ORPHAN_DOC_SCORE: u32 = 1;

/// Score the project at `root`.
///
/// A missing or unreadable context file scores zero ("Safe") with no
/// factors. Unexpected I/O while reading linked or orphaned documents is
/// returned as an error.
pub fn calculate_ccs(root: &Path, options: &AnalysisOptions) -> Result<AnalysisResult> {
    let Some(ctx) = ProjectContext::load(root, options) else {
        debug!("No context file under {}, nothing to score", root.display());
        return Ok(AnalysisResult::empty());
    };
    CcsScorer::new(&ctx).score()
}

/// Applies the CCS rule table to one loaded project
pub struct CcsScorer<'a> {
    ctx: &'a ProjectContext,
    thresholds: &'a Thresholds,
}

/// A document read during scoring
struct ScoredDoc {
    path: PathBuf,
    text: String,
}

impl<'a> CcsScorer<'a> {
    pub fn new(ctx: &'a ProjectContext) -> Self {
        Self {
            ctx,
            thresholds: &ctx.thresholds,
        }
    }

    /// Run every rule in table order and total the factors
    pub fn score(&self) -> Result<AnalysisResult> {
        let linked = self.read_linked()?;
        let linked_docs: Vec<ScoredDoc> = self
            .ctx
            .distinct_link_targets()
            .into_iter()
            .filter_map(|path| match linked.get(path) {
                Some(Document::Text(text)) => Some(ScoredDoc {
                    path: path.to_path_buf(),
                    text: text.clone(),
                }),
                _ => None,
            })
            .collect();
        let orphans = self.ctx.orphan_docs();
        let orphan_docs = read_all(&orphans)?;

        let mut factors = Vec::new();
        factors.extend(self.monolith());
        factors.extend(self.role_mixing());
        factors.extend(self.tool_forcing());
        factors.extend(self.index_content_leak());
        factors.extend(self.no_docs_separation());
        factors.extend(self.broken_links(&linked));
        factors.extend(self.headerless_docs(&linked_docs));
        factors.extend(self.fat_docs(linked_docs.iter().chain(orphan_docs.iter())));
        factors.extend(self.orphan_docs(&orphans));

        let result = AnalysisResult::from_factors(factors);
        info!(
            "CCS for {}: {} factors, total {} ({})",
            self.ctx.context_path.display(),
            result.factors.len(),
            result.total,
            result.rating
        );
        Ok(result)
    }

    /// Each distinct link target, read once
    fn read_linked(&self) -> Result<HashMap<&'a Path, Document>> {
        let mut docs = HashMap::new();
        for path in self.ctx.distinct_link_targets() {
            docs.insert(path, read_document(path)?);
        }
        Ok(docs)
    }

    fn context_factor(&self, name: FactorKind, score: u32) -> Factor {
        Factor::new(name, score, &self.ctx.context_path)
    }

    fn monolith(&self) -> Option<Factor> {
        let lines = self.ctx.line_count();
        (lines >= self.thresholds.monolith_lines).then(|| {
            self.context_factor(FactorKind::Monolith, MONOLITH_SCORE)
                .with_detail(format!("{} lines", lines))
        })
    }

    fn role_mixing(&self) -> Option<Factor> {
        let heads = headings(&self.ctx.content);
        let roles = rules::matched_roles(&heads, SCORING_ROLES);
        (roles.len() >= self.thresholds.role_categories).then(|| {
            self.context_factor(FactorKind::RoleMixing, ROLE_MIXING_SCORE)
                .with_detail(roles.join(", "))
        })
    }

    fn tool_forcing(&self) -> Option<Factor> {
        rules::has_tool_forcing(&self.ctx.content)
            .then(|| self.context_factor(FactorKind::ToolForcing, TOOL_FORCING_SCORE))
    }

    fn index_content_leak(&self) -> Option<Factor> {
        let load = ContentLoad::measure(&self.ctx.content, self.thresholds);
        load.leaks(self.thresholds).then(|| {
            self.context_factor(FactorKind::IndexContentLeak, INDEX_CONTENT_LEAK_SCORE)
                .with_detail(format!(
                    "{} code blocks, {} long paragraphs",
                    load.code_blocks, load.long_paragraphs
                ))
        })
    }

    fn no_docs_separation(&self) -> Option<Factor> {
        (self.ctx.line_count() >= self.thresholds.no_docs_min_lines && self.ctx.links.is_empty())
            .then(|| self.context_factor(FactorKind::NoDocsSeparation, NO_DOCS_SEPARATION_SCORE))
    }

    /// One factor per link occurrence whose target is missing
    fn broken_links(&self, linked: &HashMap<&Path, Document>) -> Vec<Factor> {
        self.ctx
            .links
            .iter()
            .filter(|link| matches!(linked.get(link.absolute.as_path()), Some(Document::Missing)))
            .map(|link| {
                Factor::new(FactorKind::BrokenLink, BROKEN_LINK_SCORE, &link.absolute)
                    .with_detail(link.raw.clone())
            })
            .collect()
    }

    fn headerless_docs(&self, docs: &[ScoredDoc]) -> Vec<Factor> {
        docs.iter()
            .filter(|doc| !markdown::starts_with_heading(&doc.text))
            .map(|doc| Factor::new(FactorKind::HeaderlessDoc, HEADERLESS_DOC_SCORE, &doc.path))
            .collect()
    }

    fn fat_docs<'d>(&self, docs: impl Iterator<Item = &'d ScoredDoc>) -> Vec<Factor> {
        let fat: Vec<Factor> = docs
            .filter_map(|doc| {
                let lines = markdown::line_count(&doc.text);
                (lines >= self.thresholds.fat_doc_lines).then(|| {
                    Factor::new(FactorKind::FatDoc, FAT_DOC_SCORE, &doc.path)
                        .with_detail(format!("{} lines", lines))
                })
            })
            .collect();
        cap_with_overflow(fat, self.thresholds.emission_cap, |dropped| {
            Factor::new(FactorKind::FatDocOverflow, 0, &self.ctx.root)
                .with_detail(format!("{} more not shown", dropped))
        })
    }

    fn orphan_docs(&self, orphans: &[PathBuf]) -> Vec<Factor> {
        let factors = orphans
            .iter()
            .map(|path| Factor::new(FactorKind::OrphanDoc, ORPHAN_DOC_SCORE, path))
            .collect();
        cap_with_overflow(factors, self.thresholds.emission_cap, |dropped| {
            Factor::new(FactorKind::OrphanDocOverflow, 0, self.ctx.docs_dir())
                .with_detail(format!("{} more not shown", dropped))
        })
    }
}

fn read_all(paths: &[PathBuf]) -> Result<Vec<ScoredDoc>> {
    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        if let Document::Text(text) = read_document(path)? {
            docs.push(ScoredDoc {
                path: path.clone(),
                text,
            });
        }
    }
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project(claude: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("CLAUDE.md"), claude).unwrap();
        dir
    }

    fn names(result: &AnalysisResult) -> Vec<FactorKind> {
        result.factors.iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_missing_context_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = calculate_ccs(dir.path(), &AnalysisOptions::default()).unwrap();
        assert_eq!(result, AnalysisResult::empty());
    }

    #[test]
    fn test_empty_context_file_is_safe() {
        let dir = project("");
        let result = calculate_ccs(dir.path(), &AnalysisOptions::default()).unwrap();
        assert_eq!(result.total, 0);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_tool_forcing_counted_once() {
        let dir = project("# P\nAlways use pnpm.\nYou must use tabs.\n");
        let result = calculate_ccs(dir.path(), &AnalysisOptions::default()).unwrap();
        assert_eq!(names(&result), vec![FactorKind::ToolForcing]);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_duplicate_broken_links_each_count() {
        let dir = project("# P\n[a](docs/gone.md)\n[again](docs/gone.md)\n");
        let result = calculate_ccs(dir.path(), &AnalysisOptions::default()).unwrap();
        assert_eq!(names(&result), vec![FactorKind::BrokenLink, FactorKind::BrokenLink]);
        assert_eq!(result.factors[0].detail.as_deref(), Some("docs/gone.md"));
        assert_eq!(result.total, 4);
    }

    #[test]
    fn test_directory_link_is_not_broken() {
        let dir = project("# P\nSee [src](src)\n");
        fs::create_dir(dir.path().join("src")).unwrap();
        let result = calculate_ccs(dir.path(), &AnalysisOptions::default()).unwrap();
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_headerless_linked_doc_counted_once() {
        let dir = project("# P\n[a](docs/a.md) [a](docs/a.md)\n");
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/a.md"), "\n\nno heading here\n").unwrap();
        let result = calculate_ccs(dir.path(), &AnalysisOptions::default()).unwrap();
        assert_eq!(names(&result), vec![FactorKind::HeaderlessDoc]);
    }
}
