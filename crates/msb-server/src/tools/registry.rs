//! Tool Registry Module
//!
//! Manages tool definitions and schema generation for the MCP protocol.
//! This module centralizes all tool metadata to enable consistent tool listing.

use rmcp::ErrorData as McpError;
use rmcp::model::Tool;
use std::borrow::Cow;
use std::sync::Arc;

use crate::args::{
    CancelOrderArgs, GetCustomerArgs, GetOrderArgs, GetProductArgs, RefundOrderArgs,
    UpdateShippingAddressArgs,
};

/// Tool definitions for MCP protocol
pub struct ToolDefinitions;

impl ToolDefinitions {
    /// Get the get_order tool definition
    pub fn get_order() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_order",
            "Fetch a Shopify order by ID and return the raw order JSON",
            schemars::schema_for!(GetOrderArgs),
        )
    }

    /// Get the refund_order tool definition
    pub fn refund_order() -> Result<Tool, McpError> {
        Self::create_tool(
            "refund_order",
            "Issue a refund for a Shopify order and return the raw refund JSON",
            schemars::schema_for!(RefundOrderArgs),
        )
    }

    /// Get the get_customer tool definition
    pub fn get_customer() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_customer",
            "Fetch a Shopify customer by ID and return the raw customer JSON",
            schemars::schema_for!(GetCustomerArgs),
        )
    }

    /// Get the get_product tool definition
    pub fn get_product() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_product",
            "Fetch a Shopify product by ID and return the raw product JSON",
            schemars::schema_for!(GetProductArgs),
        )
    }

    /// Get the update_shipping_address tool definition
    pub fn update_shipping_address() -> Result<Tool, McpError> {
        Self::create_tool(
            "update_shipping_address",
            "Replace the shipping address on a Shopify order and return the updated order JSON",
            schemars::schema_for!(UpdateShippingAddressArgs),
        )
    }

    /// Get the cancel_order tool definition
    pub fn cancel_order() -> Result<Tool, McpError> {
        Self::create_tool(
            "cancel_order",
            "Cancel a Shopify order and return the raw cancellation JSON",
            schemars::schema_for!(CancelOrderArgs),
        )
    }

    /// Create a tool from schema
    fn create_tool(
        name: &'static str,
        description: &'static str,
        schema: schemars::Schema,
    ) -> Result<Tool, McpError> {
        let schema_value = serde_json::to_value(schema)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(format!("Schema for {} is not an object", name), None)
            })?
            .clone();

        Ok(Tool {
            name: Cow::Borrowed(name),
            title: None,
            description: Some(Cow::Borrowed(description)),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Default::default(),
        })
    }
}

/// Create the complete list of available tools
///
/// Returns all tool definitions for the MCP list_tools response.
pub fn create_tool_list() -> Result<Vec<Tool>, McpError> {
    Ok(vec![
        ToolDefinitions::get_order()?,
        ToolDefinitions::refund_order()?,
        ToolDefinitions::get_customer()?,
        ToolDefinitions::get_product()?,
        ToolDefinitions::update_shipping_address()?,
        ToolDefinitions::cancel_order()?,
    ])
}
