//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the two file-backed stores and the optional LLM.
//! Clone is required by Axum; every field is Arc-wrapped.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::LlmComplete;
use crate::services::poems::PoemStore;
use crate::services::preferences::{PREFERENCES_FILE_NAME, PreferenceLog};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub poems: Arc<PoemStore>,
    pub preferences: Arc<PreferenceLog>,
    /// Optional LLM client. `None` if no API key is configured.
    pub llm: Option<Arc<dyn LlmComplete>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, llm: Option<Arc<dyn LlmComplete>>) -> Self {
        let poems = PoemStore::new(config.data_dir.join("poems"));
        let preferences = PreferenceLog::new(config.data_dir.join(PREFERENCES_FILE_NAME));
        Self { config: Arc::new(config), poems: Arc::new(poems), preferences: Arc::new(preferences), llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::path::Path;

    fn test_config(data_dir: &Path, auth_token: Option<&str>) -> ServerConfig {
        let mut config = ServerConfig::from_lookup(|_| None).expect("default config is valid");
        config.data_dir = data_dir.to_path_buf();
        config.auth_token = auth_token.map(str::to_owned);
        config
    }

    /// App state rooted at `data_dir` with no LLM and no server token.
    #[must_use]
    pub fn test_app_state(data_dir: &Path) -> AppState {
        AppState::new(test_config(data_dir, None), None)
    }

    #[must_use]
    pub fn test_app_state_with_llm(data_dir: &Path, llm: Arc<dyn LlmComplete>) -> AppState {
        AppState::new(test_config(data_dir, None), Some(llm))
    }

    #[must_use]
    pub fn test_app_state_with_token(data_dir: &Path, token: &str) -> AppState {
        AppState::new(test_config(data_dir, Some(token)), None)
    }
}
