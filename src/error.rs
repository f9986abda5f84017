//! Library error type
//!
//! Absence (missing context file, missing docs directory, missing linked
//! file) is never an error here; it is folded into empty or zero results by
//! the callers. Only genuinely unexpected I/O reaches this type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can escape an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read context file {}: {source}", path.display())]
    ContextFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
