//! Cancel Order Tool Handler
//!
//! Handles the cancel_order MCP tool call using the commerce gateway.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use msb_domain::CommerceGateway;

use crate::args::CancelOrderArgs;
use crate::formatter::ResponseFormatter;

/// Handler for order cancellation operations
pub struct CancelOrderHandler {
    gateway: Arc<dyn CommerceGateway>,
}

impl CancelOrderHandler {
    /// Create a new cancel_order handler
    pub fn new(gateway: Arc<dyn CommerceGateway>) -> Self {
        Self { gateway }
    }

    /// Handle the cancel_order tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<CancelOrderArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.order_id = args.order_id.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        let cancelled = self
            .gateway
            .cancel_order(&args.order_id)
            .await
            .map_err(|e| McpError::internal_error(format!("Cancellation failed: {}", e), None))?;

        ResponseFormatter::json_response(&cancelled)
    }
}
