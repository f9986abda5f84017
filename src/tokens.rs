//! Token estimation for the context an agent loads up front.
//!
//! Counts the context file plus every distinct existing link target at
//! four characters per token.

use crate::config::{load_project_config, resolve_context_file};
use crate::markdown::{extract_relative_links, read_document, resolve_links, Document};
use crate::paths;
use crate::project::AnalysisOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

const CHARS_PER_TOKEN: usize = 4;

/// Whether a file is the index or reached through it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Index,
    Linked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTokens {
    pub file: PathBuf,
    pub chars: usize,
    pub tokens: usize,
    pub role: FileRole,
}

impl FileTokens {
    fn new(file: PathBuf, text: &str, role: FileRole) -> Self {
        let chars = text.chars().count();
        Self {
            file,
            chars,
            tokens: tokens_for(chars),
            role,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEstimate {
    pub total_chars: usize,
    pub estimated_tokens: usize,
    pub files: Vec<FileTokens>,
}

/// `ceil(chars / 4)`
pub fn tokens_for(chars: usize) -> usize {
    chars.div_ceil(CHARS_PER_TOKEN)
}

/// Estimate tokens for the project at `root`.
///
/// A missing context file yields an all-zero estimate. Link targets that
/// are missing, directories or unreadable are skipped.
pub fn estimate_tokens(root: &Path, options: &AnalysisOptions) -> TokenEstimate {
    let root = paths::absolutize(root);
    let config = load_project_config(&root);
    let context_path = resolve_context_file(&root, options.context_file.as_deref(), &config);

    let Ok(Document::Text(content)) = read_document(&context_path) else {
        debug!("No context file at {}, nothing to estimate", context_path.display());
        return TokenEstimate::default();
    };

    let mut files = vec![FileTokens::new(context_path.clone(), &content, FileRole::Index)];
    let mut seen: HashSet<PathBuf> = HashSet::from([context_path]);

    for link in resolve_links(&root, &extract_relative_links(&content)) {
        if !seen.insert(link.absolute.clone()) {
            continue;
        }
        match read_document(&link.absolute) {
            Ok(Document::Text(text)) => {
                files.push(FileTokens::new(link.absolute, &text, FileRole::Linked))
            }
            Ok(_) => {}
            Err(e) => debug!("Skipping linked file: {}", e),
        }
    }

    let total_chars = files.iter().map(|f| f.chars).sum();
    TokenEstimate {
        total_chars,
        estimated_tokens: tokens_for(total_chars),
        files,
    }
}
