//! `ccs-score` command implementation

use anyhow::{Context, Result};
use context_architect::project::AnalysisOptions;
use context_architect::reporters;
use context_architect::scoring::calculate_ccs;
use std::path::Path;

pub fn run(root: &Path, options: &AnalysisOptions, format: &str) -> Result<i32> {
    let result = calculate_ccs(root, options)
        .with_context(|| format!("Failed to score {}", root.display()))?;
    println!("{}", reporters::report(&result, format)?);
    Ok(if result.total > 0 { 1 } else { 0 })
}
