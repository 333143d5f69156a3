//! Markdown formatting for plans.
//!
//! Domain models implement [`std::fmt::Display`] directly, producing
//! markdown that the CLI renders to the terminal and the MCP server returns
//! as tool text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Display      │    │   Formatted     │
//! │ (PlanResponse,  │───▶│  (markdown)     │───▶│    Output       │
//! │  PlanNode)      │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use roadmap_core::models::{PlanNode, PlanResponse};
//!
//! let response = PlanResponse::fallback(vec![PlanNode {
//!     id: "1".to_string(),
//!     topic: "SQL - Step 1 (FALLBACK)".to_string(),
//!     date: "2025-01-06".to_string(),
//!     prerequisites: vec![],
//!     materials: vec!["video".to_string()],
//!     resources: vec![],
//!     children: vec![],
//! }]);
//!
//! let output = response.to_string();
//! assert!(output.contains("## Day 1: SQL - Step 1 (FALLBACK)"));
//! assert!(output.contains("fallback plan"));
//! ```

pub mod models;
