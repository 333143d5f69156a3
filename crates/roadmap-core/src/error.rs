//! Error types for the roadmap library.

use std::fmt;

use thiserror::Error;

/// Comprehensive error type for all roadmap operations.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Transport failure or non-success response from the completion service
    #[error("Completion failed{}: {message}", status_suffix(.status))]
    Completion {
        message: String,
        status: Option<u16>,
    },
    /// The extractor could not recover a single object from a model response
    #[error("No valid objects could be recovered from the model response: {preview}")]
    NoRecoverableData { preview: String },
    /// Video metadata lookup failed or returned nothing usable
    #[error("Video metadata lookup failed for '{video_id}': {message}")]
    VideoCatalog { video_id: String, message: String },
    /// A required credential is absent from the environment
    #[error("Missing required credential: set the {variable} environment variable")]
    MissingCredential { variable: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

/// Builder for creating completion errors with an optional HTTP status.
pub struct CompletionErrorBuilder {
    message: String,
}

impl CompletionErrorBuilder {
    /// Create a new completion error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error for a response that carried the given status.
    pub fn with_status(self, status: u16) -> RoadmapError {
        RoadmapError::Completion {
            message: self.message,
            status: Some(status),
        }
    }

    /// Build the error for a failure that never produced a response.
    pub fn transport(self) -> RoadmapError {
        RoadmapError::Completion {
            message: self.message,
            status: None,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RoadmapError {
        RoadmapError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RoadmapError {
    /// Creates a builder for completion errors.
    pub fn completion(message: impl Into<String>) -> CompletionErrorBuilder {
        CompletionErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a video catalog error for the given video.
    pub fn video_catalog(video_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::VideoCatalog {
            video_id: video_id.into(),
            message: message.into(),
        }
    }

    /// Whether this fault collapses plan generation into the fallback plan.
    ///
    /// Only completion failures and total extraction failures escape the
    /// per-stage handling of the pipeline.
    pub fn triggers_fallback(&self) -> bool {
        matches!(
            self,
            RoadmapError::Completion { .. } | RoadmapError::NoRecoverableData { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to RoadmapError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| RoadmapError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;
