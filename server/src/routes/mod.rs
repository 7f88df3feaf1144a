//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON endpoints live under `/api`, plus `/healthz`. Every other path is
//! rendered by the Leptos app, with built assets served from the site root.
//! CORS is limited to the configured origin.

pub mod auth;
pub mod generate;
pub mod poems;
pub mod preferences;

use std::path::PathBuf;

use axum::Router;
use axum::http::{Method, StatusCode, header};
use axum::routing::{any, get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// JSON API routes and health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/generate_line", post(generate::generate_line))
        .route("/api/record_preference", post(preferences::record_preference))
        .route("/api/download_preferences", get(preferences::download_preferences))
        .route("/api/save_poem", post(poems::save_poem))
        .route("/api/list_poems", get(poems::list_poems))
        .route("/api/poem/{id}", get(poems::get_poem))
        .route("/api/auth/check", get(auth::check))
        .route("/api/{*rest}", any(unknown_api))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes merged with Leptos SSR for the client pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(api_routes(state).merge(leptos_router).layer(CompressionLayer::new()))
}

async fn unknown_api() -> ApiError {
    ApiError::NotFound
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
