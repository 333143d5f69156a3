//! Parameter structures for roadmap operations
//!
//! These structures are shared by every interface (CLI, MCP) without any
//! framework-specific derives beyond serde. JSON schema generation is enabled
//! through the `schema` feature so only the MCP layer pays for it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Smallest plan length the pipeline will produce, in days.
pub const MIN_TIMEFRAME_DAYS: u32 = 2;

/// Largest plan length accepted at the CLI and MCP edges, in days.
pub const MAX_TIMEFRAME_DAYS: u32 = 365;

/// Parameters for generating a learning plan.
///
/// The learner hints (`prior_knowledge`, `pace`, `learning_style`) are part of
/// the request contract but are not consumed by the generation pipeline yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRequest {
    /// Subject to learn, in free text (e.g. "Rust ownership")
    pub topic: String,
    /// Number of days the plan should span. Parsed as an integer; values
    /// below 2 or unparsable values produce a 2-day plan
    #[serde(deserialize_with = "text_or_number")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub timeframe: String,
    /// What the learner already knows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_knowledge: Option<String>,
    /// Preferred study pace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    /// Preferred learning style (videos, reading, projects, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
}

impl PlanRequest {
    /// Create a request with only the required fields set.
    pub fn new(topic: impl Into<String>, timeframe: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            timeframe: timeframe.into(),
            ..Default::default()
        }
    }

    /// Number of days to plan for, clamped to [`MIN_TIMEFRAME_DAYS`].
    ///
    /// Never rejects the request: anything that does not parse as an
    /// unsigned integer falls back to the minimum.
    ///
    /// ```rust
    /// # use roadmap_core::params::PlanRequest;
    /// assert_eq!(PlanRequest::new("Go", " 7 ").timeframe_days(), 7);
    /// assert_eq!(PlanRequest::new("Go", "1").timeframe_days(), 2);
    /// assert_eq!(PlanRequest::new("Go", "a week").timeframe_days(), 2);
    /// ```
    pub fn timeframe_days(&self) -> u32 {
        self.timeframe
            .trim()
            .parse::<u32>()
            .unwrap_or(MIN_TIMEFRAME_DAYS)
            .max(MIN_TIMEFRAME_DAYS)
    }
}

/// Parameters for a one-off chat question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ChatMessage {
    /// The question or message to send to the assistant
    pub message: String,
}

/// Accept the timeframe as either a JSON string or a JSON number.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextOrNumber;

    impl de::Visitor<'_> for TextOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TextOrNumber)
}
