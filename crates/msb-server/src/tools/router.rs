//! Tool Router Module
//!
//! Routes incoming tool call requests to the appropriate handlers.
//! This module provides a centralized dispatch mechanism for MCP tool calls.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use std::sync::Arc;

use crate::args::{
    CancelOrderArgs, GetCustomerArgs, GetOrderArgs, GetProductArgs, RefundOrderArgs,
    UpdateShippingAddressArgs,
};
use crate::handlers::{
    CancelOrderHandler, GetCustomerHandler, GetOrderHandler, GetProductHandler,
    RefundOrderHandler, UpdateShippingAddressHandler,
};

/// Handler references for tool routing
pub struct ToolHandlers {
    /// Handler for order lookup operations
    pub get_order: Arc<GetOrderHandler>,
    /// Handler for order refund operations
    pub refund_order: Arc<RefundOrderHandler>,
    /// Handler for customer lookup operations
    pub get_customer: Arc<GetCustomerHandler>,
    /// Handler for product lookup operations
    pub get_product: Arc<GetProductHandler>,
    /// Handler for shipping address replacement operations
    pub update_shipping_address: Arc<UpdateShippingAddressHandler>,
    /// Handler for order cancellation operations
    pub cancel_order: Arc<CancelOrderHandler>,
}

/// Route a tool call request to the appropriate handler
///
/// Parses the request arguments and delegates to the matching handler.
pub async fn route_tool_call(
    request: CallToolRequestParam,
    handlers: &ToolHandlers,
) -> Result<CallToolResult, McpError> {
    match request.name.as_ref() {
        "get_order" => {
            let args = parse_args::<GetOrderArgs>(&request)?;
            handlers.get_order.handle(Parameters(args)).await
        }
        "refund_order" => {
            let args = parse_args::<RefundOrderArgs>(&request)?;
            handlers.refund_order.handle(Parameters(args)).await
        }
        "get_customer" => {
            let args = parse_args::<GetCustomerArgs>(&request)?;
            handlers.get_customer.handle(Parameters(args)).await
        }
        "get_product" => {
            let args = parse_args::<GetProductArgs>(&request)?;
            handlers.get_product.handle(Parameters(args)).await
        }
        "update_shipping_address" => {
            let args = parse_args::<UpdateShippingAddressArgs>(&request)?;
            handlers
                .update_shipping_address
                .handle(Parameters(args))
                .await
        }
        "cancel_order" => {
            let args = parse_args::<CancelOrderArgs>(&request)?;
            handlers.cancel_order.handle(Parameters(args)).await
        }
        _ => Err(McpError::invalid_params(
            format!("Unknown tool: {}", request.name),
            None,
        )),
    }
}

/// Parse request arguments into the expected type
fn parse_args<T: serde::de::DeserializeOwned>(
    request: &CallToolRequestParam,
) -> Result<T, McpError> {
    let args_value = serde_json::Value::Object(request.arguments.clone().unwrap_or_default());
    serde_json::from_value(args_value)
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {}", e), None))
}
