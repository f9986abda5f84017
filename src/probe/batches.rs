//! Probe batching: groups statements into prompts for a fresh model.
//!
//! The model is asked to label each statement `REDUNDANT` (it would follow
//! the practice anyway) or `PROJECT-SPECIFIC` (the context file has to say
//! it). Statements keep their global number across batches so answers can
//! be mapped back without tracking batch offsets.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BATCH_SIZE: usize = 10;

/// One prompt's worth of statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeBatch {
    /// 1-based
    pub batch_id: usize,
    pub statements: Vec<String>,
    pub prompt: String,
}

/// Split `statements` into batches of at most `batch_size`.
///
/// A `batch_size` of 0 is treated as 1. Empty input yields no batches.
pub fn build_probe_batches(statements: &[String], batch_size: usize) -> Vec<ProbeBatch> {
    let size = batch_size.max(1);
    statements
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| ProbeBatch {
            batch_id: i + 1,
            statements: chunk.to_vec(),
            prompt: render_prompt(chunk, i * size + 1),
        })
        .collect()
}

fn render_prompt(statements: &[String], first_number: usize) -> String {
    let mut prompt = String::from(
        "You are an experienced software engineer with no knowledge of this project.\n\
         For each numbered statement below, answer with its number and one label:\n\
         - REDUNDANT: you would already follow this by default\n\
         - PROJECT-SPECIFIC: this is a choice you could not have guessed\n\n",
    );
    for (offset, statement) in statements.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", first_number + offset, statement));
    }
    prompt
}
