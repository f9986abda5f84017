//! Context Complexity Score (CCS)
//!
//! A single weighted measure of how over-specified a project's agent
//! context is. Rules are evaluated independently and emitted in a fixed
//! order; the total is the plain sum of factor scores.
//!
//! # Rule Table
//!
//! ```text
//! monolith             context file >= 300 lines                    3
//! role_mixing          headings span >= 3 role categories           2
//! tool_forcing         "always use" / "must use" anywhere           2
//! index_content_leak   >= 3 code blocks or >= 2 paragraphs >= 300ch 2
//! no_docs_separation   >= 30 lines and no relative links            1
//! broken_link          per link whose target does not exist         2
//! headerless_doc       linked doc not starting with '#'             1
//! fat_doc              linked/orphan doc >= 200 lines (first 10)    2
//! orphan_doc           docs/*.md not linked (first 10)              1
//! ```
//!
//! Capped rules append a zero-score `*_overflow` factor whose detail
//! carries the number of entries left out.
//!
//! # Rating
//!
//! - `0..=2`  Safe
//! - `3..=5`  Risk
//! - `>= 6`   High Over-Specification

mod ccs;

pub use ccs::{calculate_ccs, CcsScorer};
