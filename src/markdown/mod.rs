//! Markdown document primitives
//!
//! Text-level helpers shared by the scorer and the detectors. Nothing here
//! parses markdown into a tree; everything works on raw lines and a couple
//! of line-oriented regexes.

mod files;
mod links;
mod segment;

pub use files::{list_markdown_files, list_markdown_files_filtered, read_document, Document};
pub use links::{extract_relative_links, first_line_containing, resolve_links, ResolvedLink};
pub use segment::{
    count_code_blocks, headings, is_fence, line_count, segment_paragraphs, trim_leading, trim_line,
    Paragraph,
};

/// Whether a document starts with a heading once leading whitespace (and
/// any byte order mark) is gone
pub fn starts_with_heading(text: &str) -> bool {
    trim_leading(text).starts_with('#')
}
