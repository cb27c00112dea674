//! MCP Server Implementation
//!
//! Core MCP protocol server that exposes the commerce operations as tools.
//! The server depends only on the domain gateway contract and receives the
//! concrete client through constructor injection.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};

use msb_domain::CommerceGateway;

use crate::handlers::{
    CancelOrderHandler, GetCustomerHandler, GetOrderHandler, GetProductHandler,
    RefundOrderHandler, UpdateShippingAddressHandler,
};
use crate::tools::{ToolHandlers, create_tool_list, route_tool_call};

/// Core MCP server implementation
///
/// Implements the MCP protocol for the Shopify Admin API tool surface.
/// Every tool call is dispatched to its handler, which performs exactly one
/// gateway request and returns the upstream JSON verbatim.
#[derive(Clone)]
pub struct McpServer {
    /// Gateway for upstream commerce API operations
    gateway: Arc<dyn CommerceGateway>,
    /// Handler for order lookups
    get_order_handler: Arc<GetOrderHandler>,
    /// Handler for order refunds
    refund_order_handler: Arc<RefundOrderHandler>,
    /// Handler for customer lookups
    get_customer_handler: Arc<GetCustomerHandler>,
    /// Handler for product lookups
    get_product_handler: Arc<GetProductHandler>,
    /// Handler for shipping address replacement
    update_shipping_address_handler: Arc<UpdateShippingAddressHandler>,
    /// Handler for order cancellation
    cancel_order_handler: Arc<CancelOrderHandler>,
}

impl McpServer {
    /// Create a new MCP server with an injected gateway
    pub fn new(gateway: Arc<dyn CommerceGateway>) -> Self {
        let get_order_handler = Arc::new(GetOrderHandler::new(gateway.clone()));
        let refund_order_handler = Arc::new(RefundOrderHandler::new(gateway.clone()));
        let get_customer_handler = Arc::new(GetCustomerHandler::new(gateway.clone()));
        let get_product_handler = Arc::new(GetProductHandler::new(gateway.clone()));
        let update_shipping_address_handler =
            Arc::new(UpdateShippingAddressHandler::new(gateway.clone()));
        let cancel_order_handler = Arc::new(CancelOrderHandler::new(gateway.clone()));

        Self {
            gateway,
            get_order_handler,
            refund_order_handler,
            get_customer_handler,
            get_product_handler,
            update_shipping_address_handler,
            cancel_order_handler,
        }
    }

    /// Access to the commerce gateway
    pub fn gateway(&self) -> Arc<dyn CommerceGateway> {
        Arc::clone(&self.gateway)
    }

    /// Access to the get_order handler (for HTTP transport)
    pub fn get_order_handler(&self) -> Arc<GetOrderHandler> {
        Arc::clone(&self.get_order_handler)
    }

    /// Access to the refund_order handler (for HTTP transport)
    pub fn refund_order_handler(&self) -> Arc<RefundOrderHandler> {
        Arc::clone(&self.refund_order_handler)
    }

    /// Access to the get_customer handler (for HTTP transport)
    pub fn get_customer_handler(&self) -> Arc<GetCustomerHandler> {
        Arc::clone(&self.get_customer_handler)
    }

    /// Access to the get_product handler (for HTTP transport)
    pub fn get_product_handler(&self) -> Arc<GetProductHandler> {
        Arc::clone(&self.get_product_handler)
    }

    /// Access to the update_shipping_address handler (for HTTP transport)
    pub fn update_shipping_address_handler(&self) -> Arc<UpdateShippingAddressHandler> {
        Arc::clone(&self.update_shipping_address_handler)
    }

    /// Access to the cancel_order handler (for HTTP transport)
    pub fn cancel_order_handler(&self) -> Arc<CancelOrderHandler> {
        Arc::clone(&self.cancel_order_handler)
    }

    /// Build the handler table used by tool routing
    pub fn tool_handlers(&self) -> ToolHandlers {
        ToolHandlers {
            get_order: Arc::clone(&self.get_order_handler),
            refund_order: Arc::clone(&self.refund_order_handler),
            get_customer: Arc::clone(&self.get_customer_handler),
            get_product: Arc::clone(&self.get_product_handler),
            update_shipping_address: Arc::clone(&self.update_shipping_address_handler),
            cancel_order: Arc::clone(&self.cancel_order_handler),
        }
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "MCP Shopify Bridge".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "MCP Shopify Bridge - Shopify Admin API Tools\n\n\
                 Exposes a Shopify store's Admin REST API as MCP tools. Every tool\n\
                 performs one API request and returns the raw JSON response.\n\n\
                 Tools:\n\
                 - get_order: Fetch an order by ID\n\
                 - refund_order: Issue a refund for an order\n\
                 - get_customer: Fetch a customer by ID\n\
                 - get_product: Fetch a product by ID\n\
                 - update_shipping_address: Replace the shipping address on an order\n\
                 - cancel_order: Cancel an order\n"
                    .to_string(),
            ),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = create_tool_list()?;
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let handlers = self.tool_handlers();
        route_tool_call(request, &handlers).await
    }
}
