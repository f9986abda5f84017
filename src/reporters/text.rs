//! Text (terminal) reporter with colors and formatting

use super::Report;
use crate::models::{AnalysisResult, DetectionResult, Finding, FindingsSummary, Rating, Severity};
use crate::probe::{ProbeBatch, ProbeQuestion};
use crate::tokens::{FileRole, TokenEstimate};
use anyhow::Result;
use console::style;

/// Render a result as formatted terminal output
pub fn render<R: Report + ?Sized>(result: &R) -> Result<String> {
    Ok(result.to_text())
}

/// Severity tag
fn severity_tag(severity: Severity) -> String {
    let tag = match severity {
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
        Severity::Info => "[I]",
    };
    match severity {
        Severity::High => style(tag).red().bold().to_string(),
        Severity::Medium => style(tag).yellow().to_string(),
        Severity::Low => style(tag).cyan().to_string(),
        Severity::Info => style(tag).dim().to_string(),
    }
}

fn rating_label(rating: Rating) -> String {
    match rating {
        Rating::Safe => style(rating.as_str()).green().bold().to_string(),
        Rating::Risk => style(rating.as_str()).yellow().bold().to_string(),
        Rating::HighOverSpecification => style(rating.as_str()).red().bold().to_string(),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

impl Report for AnalysisResult {
    fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", style("Context Complexity Score").bold()));
        out.push_str(&format!(
            "Total: {}  Rating: {}\n",
            style(self.total).bold(),
            rating_label(self.rating)
        ));
        if self.factors.is_empty() {
            out.push_str(&format!("\n{}\n", style("No factors. Context looks lean.").green()));
            return out;
        }
        out.push('\n');
        for factor in &self.factors {
            out.push_str(&format!(
                "  {:>2}  {:<20} {}",
                factor.score,
                factor.name.as_str(),
                style(factor.file.display()).dim()
            ));
            if let Some(detail) = &factor.detail {
                out.push_str(&format!(" ({})", detail));
            }
            out.push('\n');
        }
        out
    }
}

fn write_finding(out: &mut String, finding: &Finding) {
    out.push_str(&format!(
        "  {} {} {}:{}\n",
        severity_tag(finding.severity),
        style(finding.kind.as_str()).bold(),
        finding.file.display(),
        finding.line
    ));
    out.push_str(&format!("      {}\n", finding.message));
}

impl Report for DetectionResult {
    fn to_text(&self) -> String {
        let mut out = String::new();
        let summary = FindingsSummary::from_findings(&self.findings);
        out.push_str(&format!(
            "{} ({})\n",
            style(format!("Phase: {}", self.phase)).bold(),
            plural(summary.total, "finding")
        ));
        if self.findings.is_empty() {
            out.push_str(&format!("{}\n", style("No anti-patterns found.").green()));
            return out;
        }
        out.push_str(&format!(
            "   {} high  {} medium  {} low  {} info\n\n",
            style(summary.high).red().bold(),
            style(summary.medium).yellow(),
            style(summary.low).cyan(),
            style(summary.info).dim()
        ));
        for finding in &self.findings {
            write_finding(&mut out, finding);
        }
        out
    }
}

impl Report for TokenEstimate {
    fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} ~{} tokens ({} chars)\n",
            style("Token estimate:").bold(),
            style(self.estimated_tokens).bold(),
            self.total_chars
        ));
        for file in &self.files {
            let role = match file.role {
                FileRole::Index => "index ",
                FileRole::Linked => "linked",
            };
            out.push_str(&format!(
                "  {} {:>8} tokens  {}\n",
                style(role).dim(),
                file.tokens,
                file.file.display()
            ));
        }
        out
    }
}

impl Report for Vec<String> {
    fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, statement) in self.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, statement));
        }
        out
    }
}

impl Report for Vec<ProbeQuestion> {
    fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, q) in self.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, style(&q.question).bold()));
            out.push_str(&format!("     {}\n", style(&q.original).dim()));
        }
        out
    }
}

impl Report for Vec<ProbeBatch> {
    fn to_text(&self) -> String {
        let mut out = String::new();
        for batch in self {
            out.push_str(&format!(
                "{}\n",
                style(format!(
                    "Batch {} ({})",
                    batch.batch_id,
                    plural(batch.statements.len(), "statement")
                ))
                .bold()
            ));
            out.push_str(&format!("{}\n", batch.prompt));
        }
        out
    }
}
