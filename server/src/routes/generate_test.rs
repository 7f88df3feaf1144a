use super::*;
use crate::llm::{CompletionRequest, LlmComplete, LlmError};
use crate::state::test_helpers::{test_app_state, test_app_state_with_llm};
use std::sync::Arc;

struct MockLlm {
    fail: bool,
}

#[async_trait::async_trait]
impl LlmComplete for MockLlm {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        if self.fail {
            return Err(LlmError::ApiRequest("connection reset".into()));
        }
        Ok(format!("t={}", request.temperature))
    }
}

fn request(text: &str) -> Json<GenerateRequest> {
    Json(GenerateRequest { current_text: text.into() })
}

#[tokio::test]
async fn generate_without_llm_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let err = generate_line(State(test_app_state(tmp.path())), request("roses")).await.unwrap_err();
    assert!(matches!(err, ApiError::LlmUnavailable));
}

#[tokio::test]
async fn generate_returns_alternatives_in_temperature_order() {
    let tmp = tempfile::tempdir().unwrap();
    let state = test_app_state_with_llm(tmp.path(), Arc::new(MockLlm { fail: false }));
    let Json(generated) = generate_line(State(state), request("roses are red")).await.unwrap();
    assert_eq!(generated.temperatures, vec![0.1, 0.5, 0.9, 1.2, 1.5]);
    assert_eq!(generated.alternatives, vec!["t=0.1", "t=0.5", "t=0.9", "t=1.2", "t=1.5"]);
}

#[tokio::test]
async fn generate_surfaces_llm_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let state = test_app_state_with_llm(tmp.path(), Arc::new(MockLlm { fail: true }));
    let err = generate_line(State(state), request("roses")).await.unwrap_err();
    assert!(matches!(err, ApiError::Llm(LlmError::ApiRequest(_))));
    assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}
