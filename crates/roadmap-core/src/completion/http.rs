//! Chat-completion client implementation using reqwest.

use log::debug;
use reqwest::{
    blocking::Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use super::{CompletionClient, CompletionRequest};
use crate::{
    config::LlmSettings,
    error::{Result, ResultExt, RoadmapError},
};

/// HTTP transport for an OpenAI-compatible chat-completions endpoint.
///
/// Performs a single request per call; there is no retry at this layer.
#[derive(Clone)]
pub struct ChatCompletionClient {
    api_key: String,
    api_url: String,
    model: String,
    client: Client,
}

impl std::fmt::Debug for ChatCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl ChatCompletionClient {
    /// Create a client from completion settings.
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .with_context("Failed to create completion HTTP client")?;

        Ok(Self {
            api_key: settings.api_key.clone(),
            api_url: settings.api_url.clone(),
            model: settings.model.clone(),
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed
        .get("message")
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}

impl CompletionClient for ChatCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ApiRequest {
            model: &self.model,
            messages: [
                ApiMessage {
                    role: "system",
                    content: &request.system_role,
                },
                ApiMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| RoadmapError::completion(format!("HTTP request failed: {e}")).transport())?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.as_u16() == 429 {
                    "Rate limited".to_string()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    "Completion request failed".to_string()
                }
            });
            return Err(RoadmapError::completion(message).with_status(status.as_u16()));
        }

        let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
            RoadmapError::completion(format!("Failed to parse response: {e}"))
                .with_status(status.as_u16())
        })?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                RoadmapError::completion("No message content in response")
                    .with_status(status.as_u16())
            })?;

        debug!("LLM raw response: {content}");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    fn settings(url: String) -> LlmSettings {
        LlmSettings {
            api_key: "fake-key".to_string(),
            api_url: url,
            model: "test-model".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            system_role: "You are a helpful AI learning roadmap generator.".to_string(),
            prompt: "Plan 3 days of Rust".to_string(),
            max_tokens: 2048,
            temperature: 0.3,
        }
    }

    #[test]
    fn test_complete_success_sends_roles_and_sampling() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer fake-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "test-model",
                "max_tokens": 2048,
                "temperature": 0.3,
                "messages": [
                    {"role": "system", "content": "You are a helpful AI learning roadmap generator."},
                    {"role": "user", "content": "Plan 3 days of Rust"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"[{\"day\":1}]"}}]}"#)
            .expect(1)
            .create();

        let client = ChatCompletionClient::new(&settings(server.url())).unwrap();
        let text = client.complete(&request()).unwrap();

        assert_eq!(text, r#"[{"day":1}]"#);
        mock.assert();
    }

    #[test]
    fn test_server_error_is_completion_failure() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").with_status(500).expect(1).create();

        let client = ChatCompletionClient::new(&settings(server.url())).unwrap();
        let err = client.complete(&request()).unwrap_err();

        match err {
            RoadmapError::Completion { message, status } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "Server error");
            }
            other => panic!("unexpected error variant: {other}"),
        }
        mock.assert();
    }

    #[test]
    fn test_provider_error_message_is_surfaced() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
            .create();

        let client = ChatCompletionClient::new(&settings(server.url())).unwrap();
        let err = client.complete(&request()).unwrap_err();

        assert!(err.triggers_fallback());
        assert_eq!(err.to_string(), "Completion failed (HTTP 401): Invalid API Key");
    }

    #[test]
    fn test_missing_choices_is_completion_failure() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create();

        let client = ChatCompletionClient::new(&settings(server.url())).unwrap();
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(err, RoadmapError::Completion { status: Some(200), .. }));
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_failure() {
        let client = ChatCompletionClient::new(&settings("http://127.0.0.1:1".to_string())).unwrap();
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(err, RoadmapError::Completion { status: None, .. }));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = ChatCompletionClient::new(&settings("http://localhost".to_string())).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("fake-key"));
        assert!(debug.contains("[REDACTED]"));
    }
}
