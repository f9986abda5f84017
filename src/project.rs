//! Per-run project snapshot.
//!
//! Every analysis entry point starts by loading a [`ProjectContext`]: the
//! config, the active context file and its resolved links. Nothing is
//! cached between runs.

use crate::config::{load_project_config, resolve_context_file, IgnoreSet, ProjectConfig, Thresholds};
use crate::markdown::{self, extract_relative_links, read_document, Document, ResolvedLink};
use crate::paths;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the docs tree scanned for orphans
pub const DOCS_DIR: &str = "docs";

/// Caller-supplied options shared by every analysis entry point
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Context file override, relative to the project root
    pub context_file: Option<String>,
    /// Rule limits for the scorer and every detector phase
    pub thresholds: Thresholds,
}

impl AnalysisOptions {
    pub fn with_context_file(context_file: impl Into<String>) -> Self {
        Self {
            context_file: Some(context_file.into()),
            ..Self::default()
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// Everything an analysis needs about one project
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute project root
    pub root: PathBuf,
    pub config: ProjectConfig,
    pub thresholds: Thresholds,
    /// Absolute path of the active context file
    pub context_path: PathBuf,
    pub content: String,
    /// Relative links of the context file, resolved against `root`
    pub links: Vec<ResolvedLink>,
}

impl ProjectContext {
    /// Load the project at `root`.
    ///
    /// Returns `None` when the context file cannot be read; that means
    /// "nothing to analyze", not an error.
    pub fn load(root: &Path, options: &AnalysisOptions) -> Option<Self> {
        let root = paths::absolutize(root);
        let config = load_project_config(&root);
        let context_path = resolve_context_file(&root, options.context_file.as_deref(), &config);

        let content = match read_document(&context_path) {
            Ok(Document::Text(text)) => text,
            Ok(other) => {
                debug!("Context file {} unavailable: {:?}", context_path.display(), other);
                return None;
            }
            Err(e) => {
                debug!("Context file unreadable: {}", e);
                return None;
            }
        };

        let links = markdown::resolve_links(&root, &extract_relative_links(&content));
        debug!(
            "Loaded context file {} ({} relative links)",
            context_path.display(),
            links.len()
        );

        Some(Self {
            root,
            config,
            thresholds: options.thresholds,
            context_path,
            content,
            links,
        })
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(DOCS_DIR)
    }

    /// Markdown files under `docs/`, ignore globs applied, sorted
    pub fn docs_files(&self) -> Vec<PathBuf> {
        let ignore = IgnoreSet::new(&self.config.ignore);
        markdown::list_markdown_files_filtered(&self.docs_dir(), &self.root, &ignore)
    }

    pub fn line_count(&self) -> usize {
        markdown::line_count(&self.content)
    }

    /// Absolute targets of all relative links
    pub fn linked_paths(&self) -> HashSet<&Path> {
        self.links.iter().map(|l| l.absolute.as_path()).collect()
    }

    /// Distinct link targets in first-occurrence order
    pub fn distinct_link_targets(&self) -> Vec<&Path> {
        let mut seen = HashSet::new();
        self.links
            .iter()
            .map(|l| l.absolute.as_path())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Docs files not reachable by any relative link
    pub fn orphan_docs(&self) -> Vec<PathBuf> {
        let linked = self.linked_paths();
        self.docs_files()
            .into_iter()
            .filter(|f| !linked.contains(f.as_path()))
            .collect()
    }
}
