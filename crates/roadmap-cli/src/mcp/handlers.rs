//! MCP tool handlers implementation

use log::{debug, warn};
use roadmap_core::{
    params::{self as core, MAX_TIMEFRAME_DAYS},
    Planner, RoadmapError,
};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Deserializes transparently into the wrapped core type and forwards its
/// schema, so core parameter types need no MCP-specific derives.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type PlanRequest = McpParams<core::PlanRequest>;
pub type ChatMessage = McpParams<core::ChatMessage>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Planner,
}

impl McpHandlers {
    pub fn new(planner: Planner) -> Self {
        Self { planner }
    }

    /// Generate a plan and return it as markdown followed by JSON.
    pub async fn generate_plan(&self, Parameters(params): Parameters<PlanRequest>) -> McpResult {
        debug!("generate_plan: {:?}", params);

        let request = params.as_ref();
        if request.topic.trim().is_empty() {
            let error = RoadmapError::invalid_input("topic").with_reason("must not be empty");
            return Err(to_mcp_error("Invalid plan request", &error));
        }
        let days = request.timeframe_days();
        if days > MAX_TIMEFRAME_DAYS {
            warn!("Rejecting {days}-day plan request for '{}'", request.topic);
            let error = RoadmapError::invalid_input("timeframe")
                .with_reason(format!("must be at most {MAX_TIMEFRAME_DAYS} days"));
            return Err(to_mcp_error("Invalid plan request", &error));
        }

        let response = self
            .planner
            .generate_plan(request)
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;
        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| to_mcp_error("Failed to serialize plan", &e.into()))?;

        Ok(CallToolResult::success(vec![
            Content::text(response.to_string()),
            Content::text(json),
        ]))
    }

    /// Answer a one-off question.
    pub async fn chat(&self, Parameters(params): Parameters<ChatMessage>) -> McpResult {
        debug!("chat: {:?}", params);

        let reply = self
            .planner
            .chat(&params.as_ref().message)
            .await
            .map_err(|e| to_mcp_error("Failed to chat", &e))?;

        Ok(CallToolResult::success(vec![Content::text(reply.response)]))
    }
}
