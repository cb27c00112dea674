//! Response formatting utilities for MCP server
//!
//! The bridge is a passthrough: every tool result is the upstream JSON body,
//! serialized back to text without reshaping. This module is the single
//! place where a gateway payload becomes MCP tool content, so no handler
//! can drift into prose formatting.

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Response formatter for MCP server tools
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Render an upstream JSON payload as a successful tool result
    ///
    /// The value is serialized compactly; object key order and field values
    /// are exactly what the upstream API returned.
    pub fn json_response(payload: &Value) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string(payload).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize response: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
