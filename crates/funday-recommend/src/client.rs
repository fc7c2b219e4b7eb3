//! Anthropic Messages API client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::RecommendError;

const ANTHROPIC_BASE: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-3-haiku-20240307";
// Generation token budget; bounds worst-case latency.
const MAX_TOKENS: u32 = 2500;
const REQUEST_TIMEOUT_SECS: u64 = 55;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageParam<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(api_key: &str) -> Result<Self, RecommendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: ANTHROPIC_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub fn new_with_base_url(api_key: &str, base_url: &str) -> Result<Self, RecommendError> {
        let mut client = Self::new(api_key)?;
        client.base_url = base_url.to_string();
        Ok(client)
    }

    /// Send a single-user-message completion and return the first text
    /// content block of the reply.
    #[instrument(skip_all, level = "info")]
    pub async fn complete(&self, prompt: &str) -> Result<String, RecommendError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![MessageParam { role: "user", content: prompt }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::warn!("Model call failed with status {}", status);
            return Err(RecommendError::Api(status));
        }

        let reply: MessagesResponse = response
            .json()
            .await
            .map_err(|e| RecommendError::InvalidJson(e.to_string()))?;

        reply
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or(RecommendError::NoTextContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_complete_returns_first_text_block() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [
                    {"type": "tool_use", "id": "t1"},
                    {"type": "text", "text": "hello"},
                    {"type": "text", "text": "second"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = AnthropicClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        assert_eq!(client.complete("hi").await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_complete_no_text_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{"type": "tool_use", "id": "t1"}]
            })))
            .mount(&mock_server)
            .await;

        let client = AnthropicClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, RecommendError::NoTextContent));
    }

    #[tokio::test]
    async fn test_complete_api_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = AnthropicClient::new_with_base_url("test-key", &mock_server.uri()).unwrap();
        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, RecommendError::Api(429)));
    }
}
