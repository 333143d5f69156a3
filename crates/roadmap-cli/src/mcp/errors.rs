//! Error handling utilities for MCP server

use roadmap_core::RoadmapError;
use rmcp::ErrorData;

/// Helper to convert roadmap errors to MCP errors
pub fn to_mcp_error(message: &str, error: &RoadmapError) -> ErrorData {
    match error {
        RoadmapError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}
