//! Preference log routes.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::routes::auth::RequireToken;
use crate::services::preferences::{PREFERENCES_FILE_NAME, PreferenceRecord};
use crate::state::AppState;

/// `POST /api/record_preference`
pub async fn record_preference(
    State(state): State<AppState>,
    Json(record): Json<PreferenceRecord>,
) -> Result<Json<Value>, ApiError> {
    tracing::debug!(alternatives = record.alternatives.len(), "recording preference");
    state.preferences.append(&record).await?;
    Ok(Json(json!({ "status": "success" })))
}

/// `GET /api/download_preferences`: the raw JSONL log as an attachment.
pub async fn download_preferences(
    State(state): State<AppState>,
    _auth: RequireToken,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state.preferences.read_all().await?;
    let disposition = format!("attachment; filename=\"{PREFERENCES_FILE_NAME}\"");
    Ok(([(header::CONTENT_TYPE, "application/json".to_owned()), (header::CONTENT_DISPOSITION, disposition)], bytes))
}

#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;
