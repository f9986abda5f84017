//! Knowledge probe
//!
//! Pulls directive statements out of the context file so they can be put
//! to a model that knows nothing about the project. Statements the model
//! would follow anyway are redundant context.

mod batches;
mod questions;
mod statements;

pub use batches::{build_probe_batches, ProbeBatch, DEFAULT_BATCH_SIZE};
pub use questions::{detect_framework, to_probe_questions, Framework, ProbeQuestion};
pub use statements::extract_statements;

use crate::config::{load_project_config, resolve_context_file};
use crate::error::{AnalysisError, Result};
use crate::paths;
use crate::project::AnalysisOptions;
use std::path::Path;
use tracing::debug;

/// Directive statements of the project's active context file.
///
/// Unlike the scorer and detectors, an unreadable context file is an
/// error here: there is nothing to probe.
pub fn extract_from_project(root: &Path, options: &AnalysisOptions) -> Result<Vec<String>> {
    let root = paths::absolutize(root);
    let config = load_project_config(&root);
    let context_path = resolve_context_file(&root, options.context_file.as_deref(), &config);

    let bytes = std::fs::read(&context_path).map_err(|source| AnalysisError::ContextFileUnreadable {
        path: context_path.clone(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let statements = extract_statements(&text);
    debug!(
        "Extracted {} statements from {}",
        statements.len(),
        context_path.display()
    );
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_context_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_from_project(dir.path(), &AnalysisOptions::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::ContextFileUnreadable { .. }));
    }

    #[test]
    fn test_uses_context_file_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AGENTS.md"), "# A\nAlways run the formatter.\n").unwrap();
        let statements =
            extract_from_project(dir.path(), &AnalysisOptions::with_context_file("AGENTS.md")).unwrap();
        assert_eq!(statements, vec!["Always run the formatter."]);
    }
}
