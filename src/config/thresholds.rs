//! Heuristic thresholds for the scorer and detectors.

/// Line, character and count limits applied by the anti-pattern rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Context file length that counts as a monolith
    pub monolith_lines: usize,
    /// Document length that counts as fat
    pub fat_doc_lines: usize,
    /// Minimum context file length before missing links matter
    pub no_docs_min_lines: usize,
    /// Paragraph length that counts as "long" for index_content_leak
    pub long_paragraph_chars: usize,
    /// Paragraph length that can be a philosophy essay
    pub essay_chars: usize,
    /// Fenced code blocks that make an index leak content
    pub code_block_leak: usize,
    /// Long paragraphs that make an index leak content
    pub long_paragraph_leak: usize,
    /// Tree-drawing lines that make a directory dump
    pub directory_dump_lines: usize,
    /// Lint rule references that make a lint dump
    pub lint_dump_matches: usize,
    /// Distinct heading roles that make role mixing
    pub role_categories: usize,
    /// Per-rule emission cap for orphan/fat/broken listings
    pub emission_cap: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            monolith_lines: 300,
            fat_doc_lines: 200,
            no_docs_min_lines: 30,
            long_paragraph_chars: 300,
            essay_chars: 500,
            code_block_leak: 3,
            long_paragraph_leak: 2,
            directory_dump_lines: 5,
            lint_dump_matches: 5,
            role_categories: 3,
            emission_cap: 10,
        }
    }
}
