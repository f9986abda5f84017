//! Lexical path helpers.
//!
//! Links are resolved against the project root without touching the
//! filesystem, so `docs/../docs/a.md` and `docs/a.md` compare equal.

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute (against the current directory) and normalize it.
pub fn absolutize(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&abs)
}

/// Resolve `target` against `root`. Absolute targets replace the root.
pub fn resolve(root: &Path, target: &str) -> PathBuf {
    normalize(&root.join(target))
}

/// Collapse `.` and `..` segments without consulting the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `path` relative to `root`, with `/` separators.
pub fn relative_slash_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
