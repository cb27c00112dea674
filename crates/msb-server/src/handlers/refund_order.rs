//! Refund Order Tool Handler
//!
//! Handles the refund_order MCP tool call using the commerce gateway.
//! The refund is a notification-style POST with no body; refund amounts
//! and line items are decided upstream.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use msb_domain::CommerceGateway;

use crate::args::RefundOrderArgs;
use crate::formatter::ResponseFormatter;

/// Handler for order refund operations
pub struct RefundOrderHandler {
    gateway: Arc<dyn CommerceGateway>,
}

impl RefundOrderHandler {
    /// Create a new refund_order handler
    pub fn new(gateway: Arc<dyn CommerceGateway>) -> Self {
        Self { gateway }
    }

    /// Handle the refund_order tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<RefundOrderArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.order_id = args.order_id.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        let refund = self
            .gateway
            .refund_order(&args.order_id)
            .await
            .map_err(|e| McpError::internal_error(format!("Refund failed: {}", e), None))?;

        ResponseFormatter::json_response(&refund)
    }
}
