//! HTTP error mapping for `/api` routes.
//!
//! ERROR HANDLING
//! ==============
//! Every failing route answers `{"detail": "<message>"}` with a status derived
//! from the domain error. Server-side faults (5xx) are logged here once so
//! handlers can simply `?`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::llm::LlmError;
use crate::services::poems::PoemError;
use crate::services::preferences::PreferenceError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Poem(#[from] PoemError),
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("Line generation is not configured")]
    LlmUnavailable,
    #[error("Missing or invalid bearer token")]
    Unauthorized,
    #[error("Not found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Poem(PoemError::Empty | PoemError::MissingId | PoemError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            Self::Poem(PoemError::NotFound(_)) | Self::Preference(PreferenceError::Missing) | Self::NotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Poem(PoemError::Io(_))
            | Self::Preference(PreferenceError::Encode(_) | PreferenceError::Io(_))
            | Self::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::LlmUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        }
        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
