//! Handlers for the one-shot CLI commands.

use anyhow::{bail, Context, Result};
use log::{info, warn};
use roadmap_core::{params::MAX_TIMEFRAME_DAYS, Planner};

use crate::{args::GenerateArgs, renderer::TerminalRenderer};

/// Runs CLI commands against a planner and prints the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generate a plan and print it as markdown or JSON.
    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        let as_json = args.json;
        let request = args.into_params();
        let days = request.timeframe_days();
        if days > MAX_TIMEFRAME_DAYS {
            warn!("Rejecting {days}-day plan request for '{}'", request.topic);
            bail!("Timeframe must be at most {MAX_TIMEFRAME_DAYS} days, got {days}");
        }

        let response = self.planner.generate_plan_blocking(&request);
        info!(
            "Plan for '{}' ready: {} days ({})",
            request.topic,
            response.plan.len(),
            response.source
        );

        if as_json {
            let json =
                serde_json::to_string_pretty(&response).context("Failed to serialize plan")?;
            println!("{json}");
        } else {
            self.renderer.render(&response.to_string());
        }
        Ok(())
    }

    /// Ask a one-off question and print the reply.
    pub fn chat(&self, message: &str) {
        let reply = self.planner.chat_blocking(message);
        self.renderer.render(&reply.to_string());
    }
}
