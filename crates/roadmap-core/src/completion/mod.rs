//! Chat-completion capability.
//!
//! The pipeline only ever needs "send a prompt, get text back". The
//! [`CompletionClient`] trait is that seam; [`ChatCompletionClient`] is the
//! HTTP implementation against an OpenAI-compatible endpoint, and tests
//! substitute scripted fakes.

mod http;

pub use http::ChatCompletionClient;

use crate::error::Result;

/// A single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System message framing the assistant's role
    pub system_role: String,
    /// User message
    pub prompt: String,
    /// Output length cap, in tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Capability that turns a prompt into raw model text.
///
/// Implementations must be safe to call from several plan generations at
/// once and must surface every transport or status failure as
/// [`crate::RoadmapError::Completion`].
pub trait CompletionClient: Send + Sync {
    /// Send exactly one request and return the assistant text.
    fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
