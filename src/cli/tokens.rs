//! `token-estimate` command implementation

use anyhow::Result;
use context_architect::project::AnalysisOptions;
use context_architect::reporters;
use context_architect::tokens::estimate_tokens;
use std::path::Path;

/// Informational only: always exit 0 on success.
pub fn run(root: &Path, options: &AnalysisOptions, format: &str) -> Result<i32> {
    let estimate = estimate_tokens(root, options);
    println!("{}", reporters::report(&estimate, format)?);
    Ok(0)
}
