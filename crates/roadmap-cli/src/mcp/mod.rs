//! MCP server implementation for Roadmap
//!
//! Exposes plan generation and quick chat as Model Context Protocol tools
//! over stdio.

use std::future::Future;

use anyhow::Result;
use log::{debug, error, info};
use roadmap_core::Planner;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{ChatMessage, McpResult, PlanRequest};

/// MCP server for Roadmap
#[derive(Clone)]
pub struct RoadmapMcpServer {
    planner: Planner,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl RoadmapMcpServer {
    /// Create a new Roadmap MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a day-by-day learning plan. Provide a topic and a timeframe in days (minimum 2; anything smaller or unparsable becomes 2). Optional hints: prior_knowledge, pace, learning_style. Returns the plan as markdown followed by the same plan as JSON. The JSON 'source' field is 'fallback' when generation failed and a generic placeholder plan was returned instead."
    )]
    async fn generate_plan(&self, params: Parameters<PlanRequest>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "chat",
        description = "Ask the assistant a short one-off question, for example to clarify a topic from a generated plan. Returns the answer as plain text."
    )]
    async fn chat(&self, params: Parameters<ChatMessage>) -> McpResult {
        self.handlers().chat(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RoadmapMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "roadmap".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Roadmap generates multi-day learning plans with an LLM.

## Tools
- `generate_plan`: build a plan for a topic over N days. Each day has a topic, prerequisites, study materials, and resources (videos are only included when they can be embedded).
- `chat`: ask a quick follow-up question.

## Notes
- Plans always have exactly max(timeframe, 2) days.
- When the model fails, a generic fallback plan is returned and its `source` is `fallback`; consider retrying later."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: RoadmapMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Roadmap MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
