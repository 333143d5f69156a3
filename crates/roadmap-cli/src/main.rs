//! Roadmap CLI Application
//!
//! Command-line interface and MCP server for the roadmap learning-plan
//! generator.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, RoadmapMcpServer};
use renderer::TerminalRenderer;
use roadmap_core::{config::Settings, Planner, PlannerBuilder};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let settings = Settings::from_env().context("Failed to load configuration")?;
    let planner = PlannerBuilder::new()
        .with_settings(settings)
        .build()
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Roadmap started");

    match command {
        Generate(args) => Cli::new(planner, renderer).generate(args),
        Chat { message } => {
            Cli::new(planner, renderer).chat(&message);
            Ok(())
        }
        Serve => serve(&planner),
    }
}

/// Run the MCP server on a dedicated runtime.
///
/// The planner's HTTP clients are blocking; the last handle to them is kept
/// here so they are dropped outside the async runtime.
fn serve(planner: &Planner) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    info!("Starting Roadmap MCP server");
    runtime
        .block_on(run_stdio_server(RoadmapMcpServer::new(planner.clone())))
        .context("MCP server failed")
}
