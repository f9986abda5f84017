//! Base detector trait
//!
//! Each phase of the anti-pattern analysis is one `Detector`. A detector
//! works on an already loaded [`ProjectContext`] and returns its findings
//! in rule order; it never sees a project without a readable context file.

use crate::error::Result;
use crate::models::{Finding, Phase};
use crate::project::ProjectContext;
use std::path::Path;

/// Trait for all anti-pattern detectors
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyDetector;
///
/// impl Detector for MyDetector {
///     fn name(&self) -> &'static str {
///         "MyDetector"
///     }
///
///     fn description(&self) -> &'static str {
///         "Detects my specific anti-pattern"
///     }
///
///     fn phase(&self) -> Phase {
///         Phase::Structure
///     }
///
///     fn detect(&self, ctx: &ProjectContext) -> Result<Vec<Finding>> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait Detector: Send + Sync {
    /// Unique identifier for this detector
    fn name(&self) -> &'static str;

    /// Human-readable description of what this detector finds
    fn description(&self) -> &'static str;

    /// The phase this detector implements
    fn phase(&self) -> Phase;

    /// Run detection. Findings are returned in rule order.
    fn detect(&self, ctx: &ProjectContext) -> Result<Vec<Finding>>;
}

/// File name used in finding messages, e.g. `CLAUDE.md`
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
