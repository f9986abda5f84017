//! `knowledge-probe` command implementation

use super::ProbeOutput;
use anyhow::Result;
use context_architect::probe::{
    build_probe_batches, detect_framework, extract_from_project, to_probe_questions,
};
use context_architect::project::AnalysisOptions;
use context_architect::reporters;
use std::path::Path;
use tracing::debug;

/// Prints the extracted statements in the requested shape.
///
/// Extraction is the only mode, so success is always exit code 0; an
/// unreadable context file surfaces as an error (exit 2).
pub fn run(root: &Path, output: ProbeOutput, options: &AnalysisOptions, format: &str) -> Result<i32> {
    let statements = extract_from_project(root, options)?;

    let rendered = match output {
        ProbeOutput::Statements => reporters::report(&statements, format)?,
        ProbeOutput::Batches(size) => {
            let batches = build_probe_batches(&statements, size);
            debug!("Built {} probe batches", batches.len());
            reporters::report(&batches, format)?
        }
        ProbeOutput::Questions => {
            let framework = detect_framework(root);
            debug!("Detected framework: {:?}", framework);
            reporters::report(&to_probe_questions(&statements, framework), format)?
        }
    };
    println!("{}", rendered);
    Ok(0)
}
