//! Line generation route.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::error::ApiError;
use crate::services::generation::{self, Generated};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub current_text: String,
}

/// `POST /api/generate_line`: one candidate next line per temperature.
pub async fn generate_line(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<Generated>, ApiError> {
    let llm = state.llm.as_deref().ok_or(ApiError::LlmUnavailable)?;
    tracing::debug!(chars = body.current_text.len(), "generating alternatives");
    let generated = generation::generate_alternatives(llm, &body.current_text).await?;
    Ok(Json(generated))
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
