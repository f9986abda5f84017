//! Shared fixtures: throwaway projects built inside a temp dir.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// An empty project (no context file)
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A project whose `CLAUDE.md` holds `content`
    pub fn with_claude(content: &str) -> Self {
        let project = Self::empty();
        project.file("CLAUDE.md", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at the root-relative `rel`, creating parents
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn config(&self, json: &str) -> &Self {
        self.file(".context-architect.json", json)
    }
}

/// `n` lines of filler text
pub fn lines(n: usize) -> String {
    (1..=n).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n")
}
