//! Poem routes: save, list, fetch.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::poems::{PoemError, PoemSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SavePoemRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SavePoemResponse {
    pub status: &'static str,
    pub id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PoemContent {
    pub content: String,
}

/// `POST /api/save_poem`
pub async fn save_poem(
    State(state): State<AppState>,
    Json(body): Json<SavePoemRequest>,
) -> Result<Json<SavePoemResponse>, ApiError> {
    if body.content.trim().is_empty() {
        return Err(PoemError::Empty.into());
    }
    let id = body.id.unwrap_or_default();
    state.poems.save(&id, &body.content).await?;
    Ok(Json(SavePoemResponse { status: "success", id }))
}

/// `GET /api/list_poems`
pub async fn list_poems(State(state): State<AppState>) -> Result<Json<Vec<PoemSummary>>, ApiError> {
    Ok(Json(state.poems.list().await?))
}

/// `GET /api/poem/{id}`
pub async fn get_poem(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<PoemContent>, ApiError> {
    let content = state.poems.get(&id).await?;
    Ok(Json(PoemContent { content }))
}

#[cfg(test)]
#[path = "poems_test.rs"]
mod tests;
