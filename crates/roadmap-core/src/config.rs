//! Runtime configuration loaded from the environment.
//!
//! Credentials are required: a missing or blank key fails at startup instead
//! of being replaced with a placeholder that would only fail later, at the
//! provider.

use std::time::Duration;

use crate::error::{Result, RoadmapError};

/// Completion service credential.
pub const LLM_API_KEY_VAR: &str = "GROQ_API_KEY";
/// Completion endpoint override.
pub const LLM_API_URL_VAR: &str = "GROQ_API_URL";
/// Completion model override.
pub const LLM_MODEL_VAR: &str = "GROQ_MODEL";
/// Video catalog credential.
pub const VIDEO_API_KEY_VAR: &str = "YOUTUBE_API_KEY";
/// Video catalog endpoint override.
pub const VIDEO_API_URL_VAR: &str = "YOUTUBE_API_URL";

const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
const DEFAULT_VIDEO_API_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

const LLM_TIMEOUT: Duration = Duration::from_secs(60);
const VIDEO_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the chat-completion service.
#[derive(Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

/// Connection settings for the video metadata service.
#[derive(Clone)]
pub struct VideoSettings {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

/// All settings needed to talk to the external services.
#[derive(Debug, Clone)]
pub struct Settings {
    pub llm: LlmSettings,
    pub video: VideoSettings,
}

impl Settings {
    /// Load settings from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::MissingCredential` if `GROQ_API_KEY` or
    /// `YOUTUBE_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| {
            value(name).ok_or_else(|| RoadmapError::MissingCredential {
                variable: name.to_string(),
            })
        };

        Ok(Self {
            llm: LlmSettings {
                api_key: required(LLM_API_KEY_VAR)?,
                api_url: value(LLM_API_URL_VAR).unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
                model: value(LLM_MODEL_VAR).unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
                timeout: LLM_TIMEOUT,
            },
            video: VideoSettings {
                api_key: required(VIDEO_API_KEY_VAR)?,
                api_url: value(VIDEO_API_URL_VAR)
                    .unwrap_or_else(|| DEFAULT_VIDEO_API_URL.to_string()),
                timeout: VIDEO_TIMEOUT,
            },
        })
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for VideoSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSettings")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
