//! LLM configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_BASE_URL: &str = "https://api.fireworks.ai/inference/v1";
pub const DEFAULT_API_KEY_ENV: &str = "FIREWORKS_API_KEY";
pub const DEFAULT_MODEL: &str = "accounts/george-strakhov-3cfc5a/models/poetry-continuation-v1";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Which OpenAI-compatible endpoint family to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// Legacy `/completions` with a raw prompt.
    Completions,
    /// `/chat/completions` with the prompt as a single user message.
    ChatCompletions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub mode: ApiMode,
    pub base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Build typed LLM config from environment variables.
    ///
    /// Optional:
    /// - `LLM_API_KEY_ENV`: names the env var containing the key (default `FIREWORKS_API_KEY`)
    /// - `LLM_MODEL`: poetry continuation model when absent
    /// - `LLM_API_MODE`: `completions` (default) or `chat_completions`
    /// - `LLM_BASE_URL`: default Fireworks inference URL
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 120
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the key variable is unset or empty, or the mode is unknown.
    pub fn from_env() -> Result<Self, LlmError> {
        let key_var = std::env::var("LLM_API_KEY_ENV").unwrap_or_else(|_| DEFAULT_API_KEY_ENV.to_string());
        let api_key = std::env::var(&key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey { var: key_var.clone() })?;

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let mode = parse_api_mode(std::env::var("LLM_API_MODE").ok().as_deref())?;
        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = LlmTimeouts {
            request_secs: env_parse_u64("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LLM_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_key, model, mode, base_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_api_mode(raw: Option<&str>) -> Result<ApiMode, LlmError> {
    match raw.unwrap_or("completions") {
        "completions" => Ok(ApiMode::Completions),
        "chat_completions" => Ok(ApiMode::ChatCompletions),
        other => Err(LlmError::ConfigParse(format!(
            "unsupported LLM_API_MODE '{other}' (expected 'completions' or 'chat_completions')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
