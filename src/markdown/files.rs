//! Document reads and markdown enumeration.

use crate::config::IgnoreSet;
use crate::error::{AnalysisError, Result};
use ignore::WalkBuilder;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of reading one document path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// File contents (invalid UTF-8 replaced)
    Text(String),
    /// Nothing at this path
    Missing,
    /// The path is a directory, not a document
    Directory,
}

impl Document {
    pub fn into_text(self) -> Option<String> {
        match self {
            Document::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Read `path` once and classify the outcome.
///
/// "Does not exist" is just one kind of read failure; there is no separate
/// existence check before the read. Errors other than absence or
/// directory-ness are returned to the caller.
pub fn read_document(path: &Path) -> Result<Document> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Document::Text(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::Missing),
        Err(e) => {
            // Classify the failure we already got; not a precondition check
            if path.is_dir() {
                Ok(Document::Directory)
            } else if !path.exists() {
                // e.g. a path component is a regular file
                Ok(Document::Missing)
            } else {
                Err(AnalysisError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }
}

/// Recursively list `.md` files under `dir`, sorted by path.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_markdown_files(dir: &Path) -> Vec<PathBuf> {
    walk_markdown(dir, |_| false)
}

/// Like [`list_markdown_files`], dropping files whose `root`-relative path
/// matches `ignore`.
pub fn list_markdown_files_filtered(dir: &Path, root: &Path, ignore: &IgnoreSet) -> Vec<PathBuf> {
    walk_markdown(dir, |path| ignore.is_ignored(path, root))
}

fn walk_markdown(dir: &Path, is_ignored: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if !path.to_string_lossy().ends_with(".md") {
            continue;
        }
        if is_ignored(path) {
            debug!("Ignoring {}", path.display());
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    files
}
