//! JSON reporter
//!
//! Pretty-printed JSON on stdout is the contract scripts and hooks parse.

use super::Report;
use anyhow::Result;

/// Render a result as pretty JSON
pub fn render<R: Report + ?Sized>(result: &R) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetectionResult, Finding, FindingKind, Severity};

    #[test]
    fn test_detection_result_shape() {
        let result = DetectionResult {
            phase: "links".into(),
            findings: vec![Finding::new(
                FindingKind::BrokenLink,
                Severity::High,
                "/p/CLAUDE.md",
                3,
                "Broken link: docs/x.md does not exist",
            )],
        };
        let parsed: serde_json::Value = serde_json::from_str(&render(&result).unwrap()).unwrap();
        assert_eq!(parsed["phase"], "links");
        assert_eq!(parsed["findings"][0]["type"], "broken_link");
        assert_eq!(parsed["findings"][0]["severity"], "high");
        assert_eq!(parsed["findings"][0]["line"], 3);
    }

    #[test]
    fn test_statement_list_is_plain_array() {
        let statements = vec!["Use pnpm for packages.".to_string()];
        let parsed: serde_json::Value = serde_json::from_str(&render(&statements).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!(["Use pnpm for packages."]));
    }
}
