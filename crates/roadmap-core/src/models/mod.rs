//! Data models for learning plans.
//!
//! The canonical, externally visible shape is [`PlanNode`] (one day of
//! content) grouped into a [`PlanResponse`]. [`ScheduleDay`] and
//! [`RawObject`] are intermediates that live only for the duration of one
//! generation run. Display implementations live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use roadmap_core::models::{PlanNode, Resource, ResourceKind};
//!
//! let node = PlanNode {
//!     id: "1".to_string(),
//!     topic: "Ownership".to_string(),
//!     date: "2025-01-06".to_string(),
//!     prerequisites: vec![],
//!     materials: vec!["video".to_string()],
//!     resources: vec![Resource::new(
//!         ResourceKind::Article,
//!         "The Book",
//!         "https://doc.rust-lang.org/book/",
//!     )],
//!     children: vec![],
//! };
//! println!("{}", node); // Markdown section with resources as links
//! ```

pub mod node;
pub mod response;
pub mod schedule;

// Re-export all public types at the models level
pub use node::{PlanNode, Resource, ResourceKind};
pub use response::{ChatReply, PlanResponse, PlanSource};
pub use schedule::{RawObject, ScheduleDay};
