//! Configuration module for context-architect
//!
//! This module handles:
//! - Project-level configuration (`.context-architect.json`)
//! - Context file resolution (CLI override > config > `CLAUDE.md`)
//! - Ignore glob matching
//! - Heuristic thresholds shared by the scorer and the detectors

pub mod glob;
mod project_config;
mod thresholds;

pub use glob::{match_glob, should_ignore, GlobPattern, IgnoreSet};
pub use project_config::{
    load_project_config, resolve_context_file, ProjectConfig, CONFIG_FILE_NAME,
    DEFAULT_CONTEXT_FILE, DEFAULT_PROBE_MODEL,
};
pub use thresholds::Thresholds;
