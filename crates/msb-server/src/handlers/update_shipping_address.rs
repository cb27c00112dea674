//! Update Shipping Address Tool Handler
//!
//! Handles the update_shipping_address MCP tool call using the commerce
//! gateway. The address fields are not validated locally; the gateway
//! forwards them verbatim and the upstream API is the authority on which
//! fields are acceptable.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use validator::Validate;

use msb_domain::CommerceGateway;

use crate::args::UpdateShippingAddressArgs;
use crate::formatter::ResponseFormatter;

/// Handler for shipping address replacement operations
pub struct UpdateShippingAddressHandler {
    gateway: Arc<dyn CommerceGateway>,
}

impl UpdateShippingAddressHandler {
    /// Create a new update_shipping_address handler
    pub fn new(gateway: Arc<dyn CommerceGateway>) -> Self {
        Self { gateway }
    }

    /// Handle the update_shipping_address tool request
    pub async fn handle(
        &self,
        Parameters(mut args): Parameters<UpdateShippingAddressArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.order_id = args.order_id.trim().to_string();
        if let Err(e) = args.validate() {
            return Err(McpError::invalid_params(
                format!("Invalid arguments: {}", e),
                None,
            ));
        }

        let updated = self
            .gateway
            .update_shipping_address(&args.order_id, &args.address)
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Address update failed: {}", e), None)
            })?;

        ResponseFormatter::json_response(&updated)
    }
}
