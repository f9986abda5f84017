//! Anti-pattern detectors
//!
//! Three independent phases, one detector each:
//!
//! - **structure**: the context file itself (monolith, role mixing, tool
//!   forcing, directory/lint dumps, philosophy essays, index content leak)
//! - **docs**: linked documents and the `docs/` tree (headerless, fat)
//! - **links**: broken relative links and orphaned docs
//!
//! A call runs exactly one phase. A project without a readable context
//! file yields an empty result for every phase.

mod base;
mod docs;
mod links;
mod structure;

pub use base::Detector;
pub use docs::DocsDetector;
pub use links::LinksDetector;
pub use structure::StructureDetector;

use crate::config::Thresholds;
use crate::error::Result;
use crate::models::{DetectionResult, Phase};
use crate::project::{AnalysisOptions, ProjectContext};
use std::path::Path;
use tracing::{debug, info};

/// The detector implementing `phase`, applying `thresholds`
pub fn detector_for(phase: Phase, thresholds: Thresholds) -> Box<dyn Detector> {
    match phase {
        Phase::Structure => Box::new(StructureDetector::with_thresholds(thresholds)),
        Phase::Docs => Box::new(DocsDetector::with_thresholds(thresholds)),
        Phase::Links => Box::new(LinksDetector::with_thresholds(thresholds)),
    }
}

/// Run one detector phase against the project at `root`.
pub fn detect_antipatterns(
    root: &Path,
    phase: Phase,
    options: &AnalysisOptions,
) -> Result<DetectionResult> {
    let Some(ctx) = ProjectContext::load(root, options) else {
        debug!("No context file under {}, nothing to detect", root.display());
        return Ok(DetectionResult::empty(phase.as_str()));
    };

    let detector = detector_for(phase, ctx.thresholds);
    debug!("Running {}: {}", detector.name(), detector.description());
    let findings = detector.detect(&ctx)?;
    info!("{}: {} findings", detector.name(), findings.len());

    Ok(DetectionResult {
        phase: phase.as_str().to_string(),
        findings,
    })
}

/// Like [`detect_antipatterns`], with the phase given by name.
///
/// An unrecognized name yields an empty result carrying that name.
/// Rejecting bad names is the caller's job.
pub fn detect_phase(root: &Path, phase: &str, options: &AnalysisOptions) -> Result<DetectionResult> {
    match phase.parse::<Phase>() {
        Ok(phase) => detect_antipatterns(root, phase, options),
        Err(e) => {
            debug!("{}", e);
            Ok(DetectionResult::empty(phase))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_context_file_every_phase_empty() {
        let dir = tempfile::tempdir().unwrap();
        for phase in Phase::ALL {
            let result = detect_antipatterns(dir.path(), phase, &AnalysisOptions::default()).unwrap();
            assert_eq!(result, DetectionResult::empty(phase.as_str()));
        }
    }

    #[test]
    fn test_unknown_phase_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "Always use make\n").unwrap();
        let result = detect_phase(dir.path(), "bogus", &AnalysisOptions::default()).unwrap();
        assert_eq!(result.phase, "bogus");
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_detector_for_matches_phase() {
        for phase in Phase::ALL {
            let detector = detector_for(phase, Thresholds::default());
            assert_eq!(detector.phase(), phase);
            assert!(!detector.description().is_empty());
        }
    }

    #[test]
    fn test_thresholds_reach_the_detector() {
        let dir = tempfile::tempdir().unwrap();
        let tree = "# P\n```\nsrc/\n├── main.rs\n└── lib.rs\n```\n";
        fs::write(dir.path().join("CLAUDE.md"), tree).unwrap();

        let defaults = detect_antipatterns(dir.path(), Phase::Structure, &AnalysisOptions::default()).unwrap();
        assert!(defaults.findings.is_empty());

        let strict = Thresholds {
            directory_dump_lines: 2,
            ..Thresholds::default()
        };
        let options = AnalysisOptions::default().with_thresholds(strict);
        let result = detect_antipatterns(dir.path(), Phase::Structure, &options).unwrap();
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].kind, crate::models::FindingKind::DirectoryDump);
        assert_eq!(result.findings[0].line, 4);
    }
}
