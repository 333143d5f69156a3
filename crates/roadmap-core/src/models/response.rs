//! Results returned to callers of the roadmap entry points.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::PlanNode;

/// Where the nodes of a [`PlanResponse`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    /// Produced by the two-stage model pipeline
    #[default]
    Generated,

    /// Synthesized deterministically after the pipeline failed
    Fallback,
}

impl PlanSource {
    /// String representation used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanSource::Generated => "generated",
            PlanSource::Fallback => "fallback",
        }
    }
}

/// An ordered learning plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanResponse {
    /// Plan nodes in study order
    pub plan: Vec<PlanNode>,

    /// Provenance of the plan; node shape is identical either way
    #[serde(default)]
    pub source: PlanSource,
}

impl PlanResponse {
    /// Wrap nodes produced by the model pipeline.
    pub fn generated(plan: Vec<PlanNode>) -> Self {
        Self {
            plan,
            source: PlanSource::Generated,
        }
    }

    /// Wrap nodes of the synthetic fallback plan.
    pub fn fallback(plan: Vec<PlanNode>) -> Self {
        Self {
            plan,
            source: PlanSource::Fallback,
        }
    }

    /// Whether the pipeline degraded to the fallback plan.
    pub fn is_fallback(&self) -> bool {
        self.source == PlanSource::Fallback
    }
}

/// Reply to a one-off chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ChatReply {
    /// Assistant text, or a fixed error notice when the service failed
    pub response: String,
}
