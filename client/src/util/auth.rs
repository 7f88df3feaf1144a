//! Token-based auth helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only persisted auth state is an opaque token under [`AUTH_TOKEN_KEY`].
//! API helpers attach it as a bearer header and the `/download` route guard
//! redirects to the public viewer when it is absent. The token is never
//! inspected here; validity is the server's concern.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::storage;

/// `localStorage` key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Public route unauthenticated visitors are sent to.
pub const PUBLIC_ROUTE: &str = "/v";

/// Build request headers for an optional token.
///
/// An empty string counts as no token.
pub fn auth_headers_for(token: Option<&str>) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.insert("Authorization".to_owned(), format!("Bearer {token}"));
    }
    headers
}

/// Headers for the token currently in storage.
pub fn auth_headers() -> HashMap<String, String> {
    auth_headers_for(stored_token().as_deref())
}

/// The stored token, if any. Empty values are treated as absent.
pub fn stored_token() -> Option<String> {
    storage::load_string(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Whether a token is present. Presence only; no expiry or signature check.
pub fn is_authenticated() -> bool {
    stored_token().is_some()
}

pub fn store_token(token: &str) {
    storage::save_string(AUTH_TOKEN_KEY, token);
}

pub fn clear_token() {
    storage::remove(AUTH_TOKEN_KEY);
}

/// Where the gated route should send the visitor, if anywhere.
pub fn guard_redirect(authenticated: bool) -> Option<&'static str> {
    if authenticated { None } else { Some(PUBLIC_ROUTE) }
}

/// Redirect to [`PUBLIC_ROUTE`] once hydrated if no token is stored.
///
/// Effects do not run during SSR, so the server always renders the gated
/// page and the browser decides after reading storage.
pub fn install_auth_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_redirect(is_authenticated()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
