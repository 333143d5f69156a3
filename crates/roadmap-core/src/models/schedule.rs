//! Intermediate shapes produced while a plan is being generated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A loosely-typed JSON object recovered from model output.
///
/// Enriched days coming back from the second prompting stage stay in this
/// form until the normalizer maps them onto [`super::PlanNode`].
pub type RawObject = Map<String, Value>;

/// One day of the lightweight schedule produced by the first stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// 1-based day index, contiguous within a schedule
    pub day: u32,

    /// What the day covers
    pub topic: String,

    /// Topics that should come before this one
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl ScheduleDay {
    /// Create a schedule day.
    pub fn new(day: u32, topic: impl Into<String>, prerequisites: Vec<String>) -> Self {
        Self {
            day,
            topic: topic.into(),
            prerequisites,
        }
    }
}
