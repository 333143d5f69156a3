//! Command-line argument definitions using clap.
//!
//! Argument structs own every clap concern (flags, help text) and convert
//! into the core parameter types with `into_params()`, so core types stay
//! free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand};
use roadmap_core::params::PlanRequest;

/// Generate day-by-day learning plans with an LLM
///
/// Roadmap asks a chat-completion model for a schedule of topics, enriches
/// each day with materials and resources, and drops videos that cannot be
/// embedded. If the model fails, a generic fallback plan is printed instead.
///
/// Requires GROQ_API_KEY and YOUTUBE_API_KEY in the environment.
#[derive(Parser)]
#[command(version, about, name = "roadmap")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a learning plan for a topic
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Ask the assistant a one-off question
    Chat {
        /// The question to ask
        message: String,
    },
    /// Start the MCP server on stdio
    Serve,
}

/// Generate a learning plan
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Subject to learn
    pub topic: String,
    /// Number of days the plan should span (minimum 2)
    #[arg(short, long, default_value = "7")]
    pub timeframe: String,
    /// What you already know about the topic
    #[arg(long)]
    pub prior_knowledge: Option<String>,
    /// Preferred study pace
    #[arg(long)]
    pub pace: Option<String>,
    /// Preferred learning style (videos, reading, projects, ...)
    #[arg(long)]
    pub learning_style: Option<String>,
    /// Print the plan as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn into_params(self) -> PlanRequest {
        PlanRequest {
            topic: self.topic,
            timeframe: self.timeframe,
            prior_knowledge: self.prior_knowledge,
            pace: self.pace,
            learning_style: self.learning_style,
        }
    }
}
