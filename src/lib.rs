//! Context Architect
//!
//! Static analysis for AI-agent context files: a Context Complexity Score,
//! a three-phase anti-pattern detector, knowledge-probe statement
//! extraction and token estimation. Every entry point is a pure function of
//! the project directory at call time; nothing is cached between runs.

pub mod bounded;
pub mod config;
pub mod detectors;
pub mod error;
pub mod markdown;
pub mod models;
pub mod paths;
pub mod probe;
pub mod project;
pub mod reporters;
pub mod rules;
pub mod scoring;
pub mod tokens;

pub use detectors::{detect_antipatterns, detect_phase};
pub use error::{AnalysisError, Result};
pub use models::{AnalysisResult, DetectionResult, Finding, Phase};
pub use project::AnalysisOptions;
pub use scoring::calculate_ccs;
pub use tokens::estimate_tokens;
