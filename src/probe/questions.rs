//! Neutral probe questions and framework detection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Frontend/backend frameworks recognised from `package.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
    NextJs,
    Express,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Angular => "Angular",
            Framework::Svelte => "Svelte",
            Framework::NextJs => "Next.js",
            Framework::Express => "Express",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detection order; the first framework with a matching dependency wins
const FRAMEWORK_PACKAGES: &[(&[&str], Framework)] = &[
    (&["react"], Framework::React),
    (&["vue"], Framework::Vue),
    (&["angular", "@angular/core"], Framework::Angular),
    (&["svelte"], Framework::Svelte),
    (&["next"], Framework::NextJs),
    (&["express"], Framework::Express),
];

/// Minimal package.json structure for parsing
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PackageJson {
    dependencies: Option<HashMap<String, serde_json::Value>>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Option<HashMap<String, serde_json::Value>>,
}

/// Framework named by `package.json` under `root`, if any.
///
/// A missing or unparsable manifest means no framework.
pub fn detect_framework(root: &Path) -> Option<Framework> {
    let path = root.join("package.json");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!("No package.json at {}: {}", path.display(), e);
            return None;
        }
    };
    let pkg: PackageJson = match serde_json::from_str(&content) {
        Ok(pkg) => pkg,
        Err(e) => {
            debug!("Unparsable package.json: {}", e);
            return None;
        }
    };

    let deps: Vec<&str> = pkg
        .dependencies
        .iter()
        .chain(pkg.dev_dependencies.iter())
        .flat_map(|m| m.keys())
        .map(String::as_str)
        .collect();

    FRAMEWORK_PACKAGES
        .iter()
        .find(|(names, _)| names.iter().any(|n| deps.contains(n)))
        .map(|(_, fw)| *fw)
}

/// A statement and the neutral question asked in its place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeQuestion {
    pub original: String,
    pub question: String,
}

static USE_FOR: OnceLock<Regex> = OnceLock::new();
static ALWAYS: OnceLock<Regex> = OnceLock::new();
static MUST: OnceLock<Regex> = OnceLock::new();

fn use_for() -> &'static Regex {
    USE_FOR.get_or_init(|| Regex::new(r"(?i)^Use\s+(.+?)\s+for\s+(.+?)\.?\s*$").expect("valid regex"))
}

fn always() -> &'static Regex {
    ALWAYS.get_or_init(|| Regex::new(r"(?i)^Always\s+(.+?)\.?\s*$").expect("valid regex"))
}

fn must() -> &'static Regex {
    MUST.get_or_init(|| Regex::new(r"(?i)^(.+?)\s+must\s+(.+?)\.?\s*$").expect("valid regex"))
}

/// Rephrase each imperative statement as a question that does not leak
/// the project's answer.
pub fn to_probe_questions(statements: &[String], framework: Option<Framework>) -> Vec<ProbeQuestion> {
    statements
        .iter()
        .map(|stmt| ProbeQuestion {
            original: stmt.clone(),
            question: to_question(stmt, framework),
        })
        .collect()
}

fn to_question(stmt: &str, framework: Option<Framework>) -> String {
    let suffix = framework.map(|fw| format!(" in {}", fw)).unwrap_or_default();

    if let Some(caps) = use_for().captures(stmt) {
        return format!("What is the standard approach for {}{}?", &caps[2], suffix);
    }
    if let Some(caps) = always().captures(stmt) {
        return format!("Is {} the standard practice{}?", &caps[1], suffix);
    }
    if let Some(caps) = must().captures(stmt) {
        return format!("Should {} {} by default{}?", &caps[1], &caps[2], suffix);
    }
    format!(
        "Is the following a standard convention or project-specific{}? {}",
        suffix, stmt
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn question(stmt: &str, fw: Option<Framework>) -> String {
        to_probe_questions(&[stmt.to_string()], fw)[0].question.clone()
    }

    #[test]
    fn test_use_for() {
        assert_eq!(
            question("Use pnpm for package management.", None),
            "What is the standard approach for package management?"
        );
        assert_eq!(
            question("use zustand for state", Some(Framework::React)),
            "What is the standard approach for state in React?"
        );
    }

    #[test]
    fn test_always() {
        assert_eq!(
            question("Always write tests first.", None),
            "Is write tests first the standard practice?"
        );
    }

    #[test]
    fn test_must() {
        assert_eq!(
            question("Components must be functional.", Some(Framework::Vue)),
            "Should Components be functional by default in Vue?"
        );
    }

    #[test]
    fn test_fallback_keeps_statement() {
        let q = to_probe_questions(&["Prefer composition over inheritance".to_string()], None);
        assert_eq!(q[0].original, "Prefer composition over inheritance");
        assert_eq!(
            q[0].question,
            "Is the following a standard convention or project-specific? Prefer composition over inheritance"
        );
    }

    #[test]
    fn test_detect_framework_order_and_dev_deps() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_framework(dir.path()), None);

        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"express": "^4"}, "devDependencies": {"react": "^18"}}"#,
        )
        .unwrap();
        assert_eq!(detect_framework(dir.path()), Some(Framework::React));

        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"@angular/core": "17"}}"#,
        )
        .unwrap();
        assert_eq!(detect_framework(dir.path()), Some(Framework::Angular));
    }

    #[test]
    fn test_detect_framework_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{ nope").unwrap();
        assert_eq!(detect_framework(dir.path()), None);
    }
}
