//! Core library for the roadmap learning-plan generator.
//!
//! This crate turns a topic and a number of days into a day-by-day learning
//! plan by prompting a chat-completion model twice (a skeleton schedule,
//! then batched enrichment) and coercing whatever comes back into a strict
//! schema. When the model fails outright, a deterministic fallback plan is
//! returned instead, so a caller always gets a plan of the requested length.
//!
//! # Pipeline
//!
//! - [`completion`]: the chat-completion capability and its HTTP client
//! - [`extract`]: tolerant recovery of JSON objects from model text
//! - [`catalog`]: video metadata lookups and the embeddability filter
//! - [`normalize`]: total mapping of raw day objects onto [`PlanNode`]
//! - [`planner`]: the orchestrator tying it all together
//!
//! Output types implement [`std::fmt::Display`] as markdown (see
//! [`display`]) and serialize with serde for JSON consumers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roadmap_core::{config::Settings, params::PlanRequest, PlannerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_settings(Settings::from_env()?)
//!     .build()?;
//!
//! let response = planner.generate_plan_blocking(&PlanRequest::new("Linear algebra", "10"));
//! for node in &response.plan {
//!     println!("{}: {}", node.id, node.topic);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod completion;
pub mod config;
pub mod display;
pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use catalog::{CachedCatalog, VideoCatalog, VideoStatus, YouTubeCatalog};
pub use completion::{ChatCompletionClient, CompletionClient, CompletionRequest};
pub use config::Settings;
pub use error::{Result, RoadmapError};
pub use models::{ChatReply, PlanNode, PlanResponse, PlanSource, Resource, ResourceKind};
pub use params::{ChatMessage, PlanRequest};
pub use planner::{Planner, PlannerBuilder};
