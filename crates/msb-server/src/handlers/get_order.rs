//! Get Order Tool Handler
//!
//! Handles the get_order MCP tool call using the commerce gateway.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use msb_domain::CommerceGateway;

use crate::args::GetOrderArgs;
use crate::formatter::ResponseFormatter;

/// Handler for order lookup operations
pub struct GetOrderHandler {
    gateway: Arc<dyn CommerceGateway>,
}

impl GetOrderHandler {
    /// Create a new get_order handler
    pub fn new(gateway: Arc<dyn CommerceGateway>) -> Self {
        Self { gateway }
    }

    /// Handle the get_order tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<GetOrderArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.order_id = args.order_id.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        let order = self
            .gateway
            .get_order(&args.order_id)
            .await
            .map_err(|e| McpError::internal_error(format!("Order lookup failed: {}", e), None))?;

        ResponseFormatter::json_response(&order)
    }
}
