//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! stored bearer token when present.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so request failures can be
//! surfaced as error toasts. Server `{"detail"}` bodies are preferred over the
//! bare status when available.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GenerateResponse, PoemSummary, PreferenceRecord};
#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, GenerateRequest, PoemContent, SavePoemRequest, SavePoemResponse};

/// Endpoint the gated download page fetches.
pub const PREFERENCES_DOWNLOAD_URL: &str = "/api/download_preferences";

/// Suggested file name for the downloaded preference log.
pub const PREFERENCES_FILE_NAME: &str = "line_preferences.jsonl";

#[cfg(any(test, feature = "hydrate"))]
fn poem_endpoint(poem_id: &str) -> String {
    format!("/api/poem/{poem_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{action} failed: {detail}"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
fn with_auth(mut builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    for (name, value) in crate::util::auth::auth_headers() {
        builder = builder.header(&name, &value);
    }
    builder
}

#[cfg(feature = "hydrate")]
async fn failure(action: &str, resp: gloo_net::http::Response) -> String {
    let detail = resp.json::<ErrorBody>().await.ok().map(|b| b.detail);
    request_failed_message(action, resp.status(), detail.as_deref())
}

/// Request candidate next lines for `current_text` via `POST /api/generate_line`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn generate_line(current_text: &str) -> Result<GenerateResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = GenerateRequest { current_text: current_text.to_owned() };
        let resp = with_auth(gloo_net::http::Request::post("/api/generate_line"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("generate", resp).await);
        }
        resp.json::<GenerateResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = current_text;
        Err("not available on server".to_owned())
    }
}

/// Log the chosen alternative via `POST /api/record_preference`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn record_preference(record: &PreferenceRecord) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/record_preference"))
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("record preference", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        Err("not available on server".to_owned())
    }
}

/// Persist a poem via `POST /api/save_poem`. Returns the saved poem id.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn save_poem(poem_id: &str, content: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SavePoemRequest { id: poem_id.to_owned(), content: content.to_owned() };
        let resp = with_auth(gloo_net::http::Request::post("/api/save_poem"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("save", resp).await);
        }
        let saved: SavePoemResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(saved.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (poem_id, content);
        Err("not available on server".to_owned())
    }
}

/// Fetch saved poem summaries from `GET /api/list_poems`, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn list_poems() -> Result<Vec<PoemSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/list_poems"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("list poems", resp).await);
        }
        resp.json::<Vec<PoemSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one poem's text from `GET /api/poem/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the poem does not exist.
pub async fn fetch_poem(poem_id: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&poem_endpoint(poem_id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("load poem", resp).await);
        }
        let body: PoemContent = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.content)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = poem_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the raw preference log bytes from [`PREFERENCES_DOWNLOAD_URL`].
///
/// # Errors
///
/// Returns an error string if the request fails, the token is rejected, or
/// no preferences have been recorded yet.
pub async fn download_preferences() -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(PREFERENCES_DOWNLOAD_URL))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure("download", resp).await);
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Ask the server whether the stored token is accepted (`GET /api/auth/check`).
///
/// Returns `None` when the check could not be performed.
pub async fn check_token() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/auth/check"))
            .send()
            .await
            .ok()?;
        Some(resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
