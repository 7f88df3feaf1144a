//! Candidate line generation.
//!
//! DESIGN
//! ======
//! One completion per entry in [`TEMPERATURES`], all in flight at once. The
//! spread goes from near-deterministic to wild so the writer sees both a safe
//! and a surprising continuation. Output order always follows the
//! temperature order, and one failed call fails the whole batch.

use futures::future::try_join_all;
use serde::Serialize;

use crate::llm::{CompletionRequest, LlmComplete, LlmError};

pub const TEMPERATURES: [f64; 5] = [0.1, 0.5, 0.9, 1.2, 1.5];
pub const MAX_TOKENS: u32 = 100;
/// Completions stop at the end of the first line.
pub const STOP_SEQUENCE: &str = "\n";

/// Alternatives index-aligned with the temperatures that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generated {
    pub alternatives: Vec<String>,
    pub temperatures: Vec<f64>,
}

#[must_use]
pub fn build_prompt(text: &str) -> String {
    format!("Continue the following poem:\n{text}\n")
}

#[must_use]
pub fn completion_request(text: &str, temperature: f64) -> CompletionRequest {
    CompletionRequest {
        prompt: build_prompt(text),
        max_tokens: MAX_TOKENS,
        temperature,
        stop: vec![STOP_SEQUENCE.to_owned()],
    }
}

/// Generate one alternative per temperature.
///
/// # Errors
///
/// Returns the first [`LlmError`] raised by any completion.
pub async fn generate_alternatives(llm: &dyn LlmComplete, text: &str) -> Result<Generated, LlmError> {
    let requests: Vec<CompletionRequest> = TEMPERATURES.iter().map(|&t| completion_request(text, t)).collect();
    let alternatives = try_join_all(requests.iter().map(|req| llm.complete(req))).await?;
    Ok(Generated { alternatives, temperatures: TEMPERATURES.to_vec() })
}

#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;
