//! One-off chat questions outside of plan generation.

use log::{debug, error};
use tokio::task;

use super::Planner;
use crate::{
    completion::CompletionRequest,
    error::{Result, RoadmapError},
    models::ChatReply,
};

/// System role for chat questions.
pub const CHAT_SYSTEM_ROLE: &str = "You are a helpful AI assistant.";
/// Sampling temperature for chat questions.
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Output token budget for chat answers.
pub const CHAT_MAX_TOKENS: u32 = 512;
/// Reply returned in place of an answer when the completion service fails.
pub const CHAT_ERROR_REPLY: &str = "[Error: Could not get response from AI]";

impl Planner {
    /// Ask the assistant a single question, blocking on the network call.
    ///
    /// Never fails: a completion failure is logged and answered with
    /// [`CHAT_ERROR_REPLY`].
    pub fn chat_blocking(&self, message: &str) -> ChatReply {
        let request = CompletionRequest {
            system_role: CHAT_SYSTEM_ROLE.to_string(),
            prompt: message.to_string(),
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
        };

        let response = match self.completion.complete(&request) {
            Ok(text) => {
                debug!("Chat reply: {} chars", text.len());
                text
            }
            Err(e) => {
                error!("Chat completion failed: {e}");
                CHAT_ERROR_REPLY.to_string()
            }
        };
        ChatReply { response }
    }

    /// Ask the assistant a single question on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Configuration` if the blocking task could not
    /// be joined.
    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        let planner = self.clone();
        let message = message.to_string();
        task::spawn_blocking(move || planner.chat_blocking(&message))
            .await
            .map_err(|e| RoadmapError::Configuration {
                message: format!("Task join error: {e}"),
            })
    }
}
