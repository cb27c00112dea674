//! Get Product Tool Handler
//!
//! Handles the get_product MCP tool call using the commerce gateway.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use msb_domain::CommerceGateway;

use crate::args::GetProductArgs;
use crate::formatter::ResponseFormatter;

/// Handler for product lookup operations
pub struct GetProductHandler {
    gateway: Arc<dyn CommerceGateway>,
}

impl GetProductHandler {
    /// Create a new get_product handler
    pub fn new(gateway: Arc<dyn CommerceGateway>) -> Self {
        Self { gateway }
    }

    /// Handle the get_product tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<GetProductArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.product_id = args.product_id.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        let product = self
            .gateway
            .get_product(&args.product_id)
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Product lookup failed: {}", e), None)
            })?;

        ResponseFormatter::json_response(&product)
    }
}
