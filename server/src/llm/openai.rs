//! OpenAI-compatible API client.
//!
//! Supports the legacy `/completions` endpoint (raw prompt continuation, what
//! fine-tuned poetry models expose) and `/chat/completions` for chat-only
//! providers. Both return the text of the first choice.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::{ApiMode, LlmTimeouts};
use super::types::{CompletionRequest, LlmError};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    mode: ApiMode,
}

impl OpenAiClient {
    pub fn new(api_key: String, mode: ApiMode, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url: base_url.trim_end_matches('/').to_string(), mode })
    }

    pub async fn complete(&self, model: &str, request: &CompletionRequest) -> Result<String, LlmError> {
        match self.mode {
            ApiMode::Completions => {
                let body = build_completions_request(model, request);
                let text = self.send_json("/completions", &body).await?;
                parse_completions_response(&text)
            }
            ApiMode::ChatCompletions => {
                let body = build_chat_completions_request(model, request);
                let text = self.send_json("/chat/completions", &body).await?;
                parse_chat_completions_response(&text)
            }
        }
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// COMPLETIONS: wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    stop: &'a [String],
}

#[derive(Deserialize)]
struct CompletionsResponse {
    #[serde(default)]
    choices: Vec<CompletionsChoice>,
}

#[derive(Deserialize)]
struct CompletionsChoice {
    #[serde(default)]
    text: String,
}

fn build_completions_request<'a>(model: &'a str, request: &'a CompletionRequest) -> CompletionsRequest<'a> {
    CompletionsRequest {
        model,
        prompt: &request.prompt,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        stop: &request.stop,
    }
}

fn parse_completions_response(text: &str) -> Result<String, LlmError> {
    let resp: CompletionsResponse = serde_json::from_str(text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    resp.choices
        .into_iter()
        .next()
        .map(|c| c.text)
        .ok_or_else(|| LlmError::ApiParse("completion response has no choices".to_string()))
}

// =============================================================================
// CHAT COMPLETIONS: wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    messages: [CcMessage<'a>; 1],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    stop: &'a [String],
}

#[derive(Debug, Serialize)]
struct CcMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CcResponse {
    #[serde(default)]
    choices: Vec<CcChoice>,
}

#[derive(Deserialize)]
struct CcChoice {
    message: CcResponseMessage,
}

#[derive(Deserialize)]
struct CcResponseMessage {
    content: Option<String>,
}

fn build_chat_completions_request<'a>(model: &'a str, request: &'a CompletionRequest) -> CcRequest<'a> {
    CcRequest {
        model,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        messages: [CcMessage { role: "user", content: &request.prompt }],
        stop: &request.stop,
    }
}

fn parse_chat_completions_response(text: &str) -> Result<String, LlmError> {
    let resp: CcResponse = serde_json::from_str(text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("chat completion response has no choices".to_string()))?;
    Ok(choice.message.content.unwrap_or_default())
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
