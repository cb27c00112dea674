//! MCP Tool Handlers
//!
//! Implementations of MCP tool calls using the commerce gateway.
//! Each handler validates its arguments, performs exactly one gateway call,
//! and returns the upstream JSON payload as the tool result.

pub mod cancel_order;
pub mod get_customer;
pub mod get_order;
pub mod get_product;
pub mod refund_order;
pub mod update_shipping_address;

// Re-export handlers for convenience
pub use cancel_order::CancelOrderHandler;
pub use get_customer::GetCustomerHandler;
pub use get_order::GetOrderHandler;
pub use get_product::GetProductHandler;
pub use refund_order::RefundOrderHandler;
pub use update_shipping_address::UpdateShippingAddressHandler;
