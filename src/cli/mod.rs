//! CLI command definitions and handlers

mod ccs;
mod detect;
mod probe;
mod tokens;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use context_architect::probe::DEFAULT_BATCH_SIZE;
use context_architect::project::AnalysisOptions;
use std::path::PathBuf;

/// Parse and validate the probe batch size (at least 1)
fn parse_batch_size(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("batch size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// Context Architect - audit AI-agent context files
#[derive(Parser, Debug)]
#[command(name = "context-architect")]
#[command(
    version,
    about = "Audit CLAUDE.md context files and their linked docs for over-specification",
    after_help = "\
Exit codes:
  0  clean
  1  issues found (score > 0 or findings present)
  2  usage or I/O error

Examples:
  context-architect ccs-score .                          Score the current project
  context-architect detect-antipatterns --phase links    Check link integrity
  context-architect knowledge-probe --extract --batch    Build redundancy probe prompts
  context-architect token-estimate --format text         Human-readable token count"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Context file relative to the project root (overrides config)
    #[arg(long)]
    pub context_file: Option<String>,

    /// Output format: json or text
    #[arg(long, short = 'f', default_value = "json", value_parser = ["json", "text"])]
    pub format: String,
}

impl CommonArgs {
    fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            context_file: self.context_file.clone(),
            ..AnalysisOptions::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the Context Complexity Score (exit 1 if the score is above 0)
    CcsScore {
        /// Project root
        #[arg(value_name = "ROOT")]
        path: Option<PathBuf>,

        /// Project root (alternative to the positional argument)
        #[arg(long, conflicts_with = "path")]
        root: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Run one anti-pattern detection phase (exit 1 if anything is found)
    DetectAntipatterns {
        /// Phase to run
        #[arg(long, default_value = "structure", value_parser = ["structure", "docs", "links"])]
        phase: String,

        /// Project root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Extract directive statements for redundancy probing
    KnowledgeProbe {
        /// Project root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Extract statements from the context file
        #[arg(long, required = true)]
        extract: bool,

        /// Group statements into probe prompts
        #[arg(long, conflicts_with = "questions")]
        batch: bool,

        /// Rephrase statements as neutral probe questions
        #[arg(long)]
        questions: bool,

        /// Statements per probe prompt
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = parse_batch_size)]
        batch_size: usize,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Estimate tokens for the context file and its linked docs
    TokenEstimate {
        /// Project root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// What `knowledge-probe` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutput {
    Statements,
    Batches(usize),
    Questions,
}

/// Run the selected command and return the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::CcsScore { path, root, common } => {
            let root = root.or(path).unwrap_or_else(|| PathBuf::from("."));
            ccs::run(&root, &common.options(), &common.format)
        }

        Commands::DetectAntipatterns {
            phase,
            root,
            common,
        } => detect::run(&root, &phase, &common.options(), &common.format),

        Commands::KnowledgeProbe {
            root,
            extract: _,
            batch,
            questions,
            batch_size,
            common,
        } => {
            let output = if batch {
                ProbeOutput::Batches(batch_size)
            } else if questions {
                ProbeOutput::Questions
            } else {
                ProbeOutput::Statements
            };
            probe::run(&root, output, &common.options(), &common.format)
        }

        Commands::TokenEstimate { root, common } => {
            tokens::run(&root, &common.options(), &common.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ccs_root_positional_or_flag() {
        let cli = Cli::try_parse_from(["context-architect", "ccs-score", "proj"]).unwrap();
        assert!(matches!(cli.command, Commands::CcsScore { path: Some(_), root: None, .. }));

        let cli = Cli::try_parse_from(["context-architect", "ccs-score", "--root", "proj"]).unwrap();
        assert!(matches!(cli.command, Commands::CcsScore { path: None, root: Some(_), .. }));
    }

    #[test]
    fn test_invalid_phase_rejected() {
        let err = Cli::try_parse_from([
            "context-architect",
            "detect-antipatterns",
            "--phase",
            "bogus",
        ])
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("structure") && msg.contains("docs") && msg.contains("links"));
    }

    #[test]
    fn test_probe_requires_extract() {
        let err = Cli::try_parse_from(["context-architect", "knowledge-probe"]).unwrap_err();
        assert!(err.to_string().contains("--extract"));
    }

    #[test]
    fn test_batch_and_questions_conflict() {
        assert!(Cli::try_parse_from([
            "context-architect",
            "knowledge-probe",
            "--extract",
            "--batch",
            "--questions",
        ])
        .is_err());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(parse_batch_size("0").is_err());
        assert_eq!(parse_batch_size("3"), Ok(3));
    }
}
