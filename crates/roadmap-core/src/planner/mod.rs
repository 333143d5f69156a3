//! High-level planner API for generating learning plans.
//!
//! The [`Planner`] owns the two external capabilities (chat completion and
//! video metadata) and drives the generation pipeline on top of them.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Pipeline     │    │    Extract /    │    │  Capabilities   │
//! │ (schedule, then │───▶│    Normalize    │───▶│ (completion,    │
//! │  batch enrich)  │    │                 │    │  video catalog) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Orchestration        Data recovery          Network I/O
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances from settings
//!   or injected capabilities
//! - [`pipeline`]: The generation state machine and its fallback edge
//! - [`chat`]: One-off chat questions
//! - [`schedule`]: Gap-filling, batching, and batch alignment
//! - [`prompts`]: Prompt templates for both stages
//! - [`fallback`]: The deterministic fallback plan
//!
//! ## Guarantees
//!
//! Plan generation never fails: a request always yields exactly
//! `max(timeframe, 2)` well-formed nodes. Completion and extraction failures
//! collapse into the fallback plan, and the response says which one the
//! caller got.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use roadmap_core::{config::Settings, params::PlanRequest, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_settings(Settings::from_env()?)
//!     .build()?;
//!
//! let response = planner
//!     .generate_plan(&PlanRequest::new("Rust ownership", "7"))
//!     .await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::{civil::Date, Zoned};

pub mod builder;
pub mod chat;
pub mod fallback;
pub mod pipeline;
pub mod prompts;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

use crate::{
    catalog::VideoCatalog,
    completion::{CompletionClient, CompletionRequest},
    error::Result,
};

/// System role used for every plan-generation completion.
pub const PLAN_SYSTEM_ROLE: &str = "You are a helpful AI learning roadmap generator.";
/// Sampling temperature for plan-generation completions.
pub const PLAN_TEMPERATURE: f32 = 0.3;
/// Output token budget for each generation stage.
pub const STAGE_MAX_TOKENS: u32 = 2048;

/// Main planner interface.
///
/// Cheap to clone; clones share the underlying clients.
#[derive(Clone)]
pub struct Planner {
    pub(crate) completion: Arc<dyn CompletionClient>,
    pub(crate) catalog: Arc<dyn VideoCatalog>,
    pub(crate) date: Option<Date>,
}

impl Planner {
    /// Creates a planner from its capabilities.
    pub(crate) fn new(
        completion: Arc<dyn CompletionClient>,
        catalog: Arc<dyn VideoCatalog>,
        date: Option<Date>,
    ) -> Self {
        Self {
            completion,
            catalog,
            date,
        }
    }

    /// Send one plan-generation prompt with the fixed role and temperature.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Completion` on transport or status failure.
    pub fn complete_for_plan(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        self.completion.complete(&CompletionRequest {
            system_role: PLAN_SYSTEM_ROLE.to_string(),
            prompt: prompt.to_string(),
            max_tokens,
            temperature: PLAN_TEMPERATURE,
        })
    }

    /// The date stamped on generated nodes: the pinned date, or today.
    pub fn generation_date(&self) -> Date {
        self.date.unwrap_or_else(|| Zoned::now().date())
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("date", &self.date)
            .finish_non_exhaustive()
    }
}
