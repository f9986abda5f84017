//! Core data models for context-architect
//!
//! These models are shared by the scorer, the anti-pattern detector and the
//! reporters. Everything here is created fresh per run and never mutated
//! after it has been pushed into a result.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Severity levels for findings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Anti-pattern categories reported by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Monolith,
    RoleMixing,
    ToolForcing,
    DirectoryDump,
    LintDump,
    PhilosophyEssay,
    IndexContentLeak,
    HeaderlessDoc,
    FatDoc,
    BrokenLink,
    BrokenLinkOverflow,
    OrphanDoc,
    OrphanDocOverflow,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Monolith => "monolith",
            FindingKind::RoleMixing => "role_mixing",
            FindingKind::ToolForcing => "tool_forcing",
            FindingKind::DirectoryDump => "directory_dump",
            FindingKind::LintDump => "lint_dump",
            FindingKind::PhilosophyEssay => "philosophy_essay",
            FindingKind::IndexContentLeak => "index_content_leak",
            FindingKind::HeaderlessDoc => "headerless_doc",
            FindingKind::FatDoc => "fat_doc",
            FindingKind::BrokenLink => "broken_link",
            FindingKind::BrokenLinkOverflow => "broken_link_overflow",
            FindingKind::OrphanDoc => "orphan_doc",
            FindingKind::OrphanDocOverflow => "orphan_doc_overflow",
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single anti-pattern finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub severity: Severity,
    pub file: PathBuf,
    /// 1-based line the finding points at
    pub line: usize,
    pub message: String,
}

impl Finding {
    pub fn new(
        kind: FindingKind,
        severity: Severity,
        file: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            file: file.into(),
            line: line.max(1),
            message: message.into(),
        }
    }
}

/// Summary of findings by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
    pub total: usize,
}

impl FindingsSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for f in findings {
            match f.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
                Severity::Info => summary.info += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// Detector phase. Phases are independent; one call runs exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Structure,
    Docs,
    Links,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Structure, Phase::Docs, Phase::Links];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Structure => "structure",
            Phase::Docs => "docs",
            Phase::Links => "links",
        }
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structure" => Ok(Phase::Structure),
            "docs" => Ok(Phase::Docs),
            "links" => Ok(Phase::Links),
            other => Err(format!(
                "Invalid phase \"{}\". Must be one of: structure, docs, links",
                other
            )),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one detector phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Phase name as requested by the caller (kept verbatim for unknown phases)
    pub phase: String,
    pub findings: Vec<Finding>,
}

impl DetectionResult {
    pub fn empty(phase: impl Into<String>) -> Self {
        Self {
            phase: phase.into(),
            findings: Vec::new(),
        }
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// CCS rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Monolith,
    RoleMixing,
    ToolForcing,
    IndexContentLeak,
    NoDocsSeparation,
    BrokenLink,
    HeaderlessDoc,
    FatDoc,
    FatDocOverflow,
    OrphanDoc,
    OrphanDocOverflow,
}

impl FactorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorKind::Monolith => "monolith",
            FactorKind::RoleMixing => "role_mixing",
            FactorKind::ToolForcing => "tool_forcing",
            FactorKind::IndexContentLeak => "index_content_leak",
            FactorKind::NoDocsSeparation => "no_docs_separation",
            FactorKind::BrokenLink => "broken_link",
            FactorKind::HeaderlessDoc => "headerless_doc",
            FactorKind::FatDoc => "fat_doc",
            FactorKind::FatDocOverflow => "fat_doc_overflow",
            FactorKind::OrphanDoc => "orphan_doc",
            FactorKind::OrphanDocOverflow => "orphan_doc_overflow",
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted contribution to the Context Complexity Score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub name: FactorKind,
    pub score: u32,
    pub file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Factor {
    pub fn new(name: FactorKind, score: u32, file: impl Into<PathBuf>) -> Self {
        Self {
            name,
            score,
            file: file.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// CCS rating bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Safe")]
    Safe,
    #[serde(rename = "Risk")]
    Risk,
    #[serde(rename = "High Over-Specification")]
    HighOverSpecification,
}

impl Rating {
    /// `<= 2` Safe, `3..=5` Risk, `>= 6` High Over-Specification
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=2 => Rating::Safe,
            3..=5 => Rating::Risk,
            _ => Rating::HighOverSpecification,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Safe => "Safe",
            Rating::Risk => "Risk",
            Rating::HighOverSpecification => "High Over-Specification",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context Complexity Score for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub factors: Vec<Factor>,
    pub total: u32,
    pub rating: Rating,
}

impl AnalysisResult {
    /// Build the result; `total` and `rating` are derived, never supplied.
    pub fn from_factors(factors: Vec<Factor>) -> Self {
        let total = factors.iter().map(|f| f.score).sum();
        Self {
            factors,
            total,
            rating: Rating::from_total(total),
        }
    }

    pub fn empty() -> Self {
        Self::from_factors(Vec::new())
    }
}
