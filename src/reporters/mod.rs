//! Output reporters for analysis results
//!
//! Supports two output formats:
//! - `json` - Machine-readable pretty JSON (the default)
//! - `text` - Terminal output with colors
//!
//! Every result type the CLI prints implements [`Report`]; exit codes never
//! depend on the format.

mod json;
mod text;

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: json, text", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// A printable result
pub trait Report: Serialize {
    /// Human-readable rendering
    fn to_text(&self) -> String;
}

/// Render a result in the specified format
pub fn report<R: Report + ?Sized>(result: &R, format: &str) -> Result<String> {
    report_with_format(result, OutputFormat::from_str(format)?)
}

/// Render a result using an OutputFormat enum
pub fn report_with_format<R: Report + ?Sized>(result: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::render(result),
        OutputFormat::Text => text::render(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("sarif".parse::<OutputFormat>().is_err());
        assert!("terminal".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_report_by_name() {
        let result = crate::models::AnalysisResult::empty();
        let out = report(&result, "json").unwrap();
        assert!(out.contains("\"rating\": \"Safe\""));
        assert!(report(&result, "xml").is_err());
    }
}
