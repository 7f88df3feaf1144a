//! Bearer token checks.
//!
//! The browser keeps its token in local storage and sends it as
//! `Authorization: Bearer <token>`. When `AUTH_TOKEN` is configured the server
//! requires an exact match on protected routes. Without it, any non-empty
//! token passes `/api/auth/check` and protected routes stay open.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, header};

use crate::error::ApiError;
use crate::state::AppState;

/// Token from an `Authorization: Bearer` header, if present and non-empty.
/// The scheme name is case-insensitive.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Whether `presented` satisfies the configured token.
#[must_use]
pub fn token_accepted(expected: Option<&str>, presented: Option<&str>) -> bool {
    match (expected, presented) {
        (_, None) => false,
        (None, Some(_)) => true,
        (Some(expected), Some(presented)) => constant_time_eq(expected.as_bytes(), presented.as_bytes()),
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

// =============================================================================
// EXTRACTOR
// =============================================================================

/// Guards a handler behind `AUTH_TOKEN`. Open when no token is configured.
pub struct RequireToken;

impl<S> FromRequestParts<S> for RequireToken
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.config.auth_token.as_deref() else {
            return Ok(Self);
        };
        if token_accepted(Some(expected), bearer_token(&parts.headers)) {
            Ok(Self)
        } else {
            tracing::warn!(path = %parts.uri.path(), "rejected request with missing or wrong token");
            Err(ApiError::Unauthorized)
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/check`: 204 if the presented token is accepted.
pub async fn check(State(state): State<AppState>, headers: HeaderMap) -> Result<StatusCode, ApiError> {
    if token_accepted(state.config.auth_token.as_deref(), bearer_token(&headers)) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::Unauthorized)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
