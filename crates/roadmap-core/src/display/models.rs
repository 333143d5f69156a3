//! Display implementations for domain models.

use std::fmt;

use crate::models::{ChatReply, PlanNode, PlanResponse, PlanSource, Resource, ResourceKind};

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({}) ({})", self.title, self.url, self.kind)
    }
}

impl fmt::Display for PlanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}: {}", self.id, self.topic)?;
        writeln!(f)?;
        writeln!(f, "- Date: {}", self.date)?;
        if !self.prerequisites.is_empty() {
            writeln!(f, "- Prerequisites: {}", self.prerequisites.join(", "))?;
        }
        if !self.materials.is_empty() {
            writeln!(f, "- Materials: {}", self.materials.join(", "))?;
        }

        if !self.resources.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Resources")?;
            writeln!(f)?;
            for resource in &self.resources {
                writeln!(f, "- {resource}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.plan.len();
        writeln!(
            f,
            "# Learning plan ({days} {})",
            if days == 1 { "day" } else { "days" }
        )?;
        writeln!(f)?;

        if self.is_fallback() {
            writeln!(
                f,
                "> Generation failed; this is a generic fallback plan."
            )?;
            writeln!(f)?;
        }

        if self.plan.is_empty() {
            return writeln!(f, "No days in this plan.");
        }
        for node in &self.plan {
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ChatReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.response)
    }
}
