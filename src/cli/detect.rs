//! `detect-antipatterns` command implementation

use anyhow::{Context, Result};
use context_architect::detectors::detect_antipatterns;
use context_architect::models::Phase;
use context_architect::project::AnalysisOptions;
use context_architect::reporters;
use std::path::Path;

pub fn run(root: &Path, phase: &str, options: &AnalysisOptions, format: &str) -> Result<i32> {
    // clap restricts the value set already; this only guards direct callers
    let phase: Phase = phase.parse().map_err(anyhow::Error::msg)?;

    let result = detect_antipatterns(root, phase, options)
        .with_context(|| format!("Failed to run {} phase on {}", phase, root.display()))?;
    println!("{}", reporters::report(&result, format)?);
    Ok(if result.has_findings() { 1 } else { 0 })
}
