//! LLM: completion adapter for line suggestions.
//!
//! DESIGN
//! ======
//! Configured from environment variables. Handlers only see the
//! [`LlmComplete`] trait so tests can substitute a mock; [`LlmClient`] is the
//! production implementation over an OpenAI-compatible HTTP API.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::{CompletionRequest, LlmComplete, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client bound to one model.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables. See [`LlmConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = openai::OpenAiClient::new(config.api_key, config.mode, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmComplete for LlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.inner.complete(&self.model, request).await
    }
}
