//! Project-level configuration support
//!
//! Loads per-project configuration from `.context-architect.json` in the
//! project root.
//!
//! # Configuration Format
//!
//! ```json
//! {
//!   "context_files": ["CLAUDE.md"],
//!   "reference_docs": ["docs/conventions.md"],
//!   "ignore": ["docs/plans/**"],
//!   "probe_model": "sonnet"
//! }
//! ```
//!
//! Loading is best-effort: a missing or unparsable file yields the defaults,
//! and each field is validated on its own so one malformed field never
//! discards the others.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed config file name, looked up in the project root
pub const CONFIG_FILE_NAME: &str = ".context-architect.json";

/// Context file used when neither the CLI nor the config names one
pub const DEFAULT_CONTEXT_FILE: &str = "CLAUDE.md";

pub const DEFAULT_PROBE_MODEL: &str = "sonnet";

/// Project configuration loaded from `.context-architect.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    /// Context files, first one is the active index
    pub context_files: Vec<String>,

    /// Reference docs the project considers canonical
    pub reference_docs: Vec<String>,

    /// Root-relative glob patterns excluded from docs enumeration
    pub ignore: Vec<String>,

    /// Model name recorded for redundancy probing
    pub probe_model: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            context_files: vec![DEFAULT_CONTEXT_FILE.to_string()],
            reference_docs: Vec::new(),
            ignore: Vec::new(),
            probe_model: DEFAULT_PROBE_MODEL.to_string(),
        }
    }
}

impl ProjectConfig {
    /// Build a config from a parsed JSON document, field by field.
    pub fn from_json(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(obj) = value.as_object() else {
            warn!("{} is not a JSON object, using defaults", CONFIG_FILE_NAME);
            return defaults;
        };

        Self {
            context_files: string_list(obj.get("context_files"), "context_files")
                .unwrap_or(defaults.context_files),
            reference_docs: string_list(obj.get("reference_docs"), "reference_docs")
                .unwrap_or(defaults.reference_docs),
            ignore: string_list(obj.get("ignore"), "ignore").unwrap_or(defaults.ignore),
            probe_model: match obj.get("probe_model") {
                None => defaults.probe_model,
                Some(Value::String(s)) => s.clone(),
                Some(other) => {
                    warn!("probe_model must be a string, got {}; using default", other);
                    defaults.probe_model
                }
            },
        }
    }

    /// The configured primary context file, if any
    pub fn primary_context_file(&self) -> Option<&str> {
        self.context_files
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// `None` when absent or not an array of strings.
fn string_list(value: Option<&Value>, field: &str) -> Option<Vec<String>> {
    let value = value?;
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            warn!("{} must be an array of strings; using default", field);
            return None;
        }
    };
    let strings: Option<Vec<String>> = items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect();
    if strings.is_none() {
        warn!("{} contains non-string entries; using default", field);
    }
    strings
}

/// Load project configuration from the project root.
///
/// Returns default configuration if the file is missing, unreadable or not
/// valid JSON. Never fails.
pub fn load_project_config(root: &Path) -> ProjectConfig {
    let config_path = root.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            debug!(
                "No project config at {} ({}), using defaults",
                config_path.display(),
                e
            );
            return ProjectConfig::default();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => {
            debug!("Loaded project config from {}", config_path.display());
            ProjectConfig::from_json(&value)
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", config_path.display(), e);
            ProjectConfig::default()
        }
    }
}

/// Resolve the active context file.
///
/// Priority: CLI override > `config.context_files[0]` > `CLAUDE.md`. Empty
/// strings count as "not provided". The result is absolute.
pub fn resolve_context_file(
    root: &Path,
    cli_override: Option<&str>,
    config: &ProjectConfig,
) -> PathBuf {
    let file = cli_override
        .filter(|s| !s.is_empty())
        .or_else(|| config.primary_context_file())
        .unwrap_or(DEFAULT_CONTEXT_FILE);
    crate::paths::resolve(&crate::paths::absolutize(root), file)
}
