//! Get Customer Tool Handler
//!
//! Handles the get_customer MCP tool call using the commerce gateway.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use msb_domain::CommerceGateway;

use crate::args::GetCustomerArgs;
use crate::formatter::ResponseFormatter;

/// Handler for customer lookup operations
pub struct GetCustomerHandler {
    gateway: Arc<dyn CommerceGateway>,
}

impl GetCustomerHandler {
    /// Create a new get_customer handler
    pub fn new(gateway: Arc<dyn CommerceGateway>) -> Self {
        Self { gateway }
    }

    /// Handle the get_customer tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<GetCustomerArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.customer_id = args.customer_id.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        let customer = self
            .gateway
            .get_customer(&args.customer_id)
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Customer lookup failed: {}", e), None)
            })?;

        ResponseFormatter::json_response(&customer)
    }
}
