//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (via `dotenvy`) before calling [`ServerConfig::from_env`],
//! so every key below may also live in that file.

use std::path::PathBuf;

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8888";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid ALLOWED_ORIGIN: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Root for `poems/` and `line_preferences.jsonl`.
    pub data_dir: PathBuf,
    /// The only origin CORS admits.
    pub allowed_origin: HeaderValue,
    /// When set, bearer token required to download preferences.
    pub auth_token: Option<String>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// - `PORT`: default 8888
    /// - `DATA_DIR`: default `data`
    /// - `ALLOWED_ORIGIN`: default `http://localhost:8888`
    /// - `AUTH_TOKEN`: optional; blank counts as unset
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `ALLOWED_ORIGIN` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `ALLOWED_ORIGIN` cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let data_dir = lookup("DATA_DIR")
            .filter(|d| !d.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let origin = lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_owned());
        let allowed_origin = HeaderValue::from_str(origin.trim_end_matches('/'))
            .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?;
        let auth_token = lookup("AUTH_TOKEN")
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());

        Ok(Self { port, data_dir, allowed_origin, auth_token })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
