//! Tool argument types for MCP server
//!
//! This module contains all the argument types used by the MCP tools.
//! Identifier fields are validated for shape only; whether an identifier
//! exists is decided upstream and reported through the tool result.

use msb_domain::ShippingAddress;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// Arguments for the get_order tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for fetching an order")]
pub struct GetOrderArgs {
    /// Identifier of the order to fetch
    #[validate(length(min = 1, max = 64, message = "Order ID must be between 1 and 64 characters"))]
    #[validate(custom(function = validate_resource_id, message = "Invalid order ID"))]
    #[schemars(description = "Shopify order ID (e.g., '450789469')")]
    pub order_id: String,
}

/// Arguments for the refund_order tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for refunding an order")]
pub struct RefundOrderArgs {
    /// Identifier of the order to refund
    #[validate(length(min = 1, max = 64, message = "Order ID must be between 1 and 64 characters"))]
    #[validate(custom(function = validate_resource_id, message = "Invalid order ID"))]
    #[schemars(description = "Shopify order ID to refund")]
    pub order_id: String,
}

/// Arguments for the get_customer tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for fetching a customer")]
pub struct GetCustomerArgs {
    /// Identifier of the customer to fetch
    #[validate(length(min = 1, max = 64, message = "Customer ID must be between 1 and 64 characters"))]
    #[validate(custom(function = validate_resource_id, message = "Invalid customer ID"))]
    #[schemars(description = "Shopify customer ID (e.g., '207119551')")]
    pub customer_id: String,
}

/// Arguments for the get_product tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for fetching a product")]
pub struct GetProductArgs {
    /// Identifier of the product to fetch
    #[validate(length(min = 1, max = 64, message = "Product ID must be between 1 and 64 characters"))]
    #[validate(custom(function = validate_resource_id, message = "Invalid product ID"))]
    #[schemars(description = "Shopify product ID (e.g., '632910392')")]
    pub product_id: String,
}

/// Arguments for the update_shipping_address tool
///
/// The address is forwarded upstream exactly as supplied. Unknown address
/// fields are preserved, so callers can send any field the Admin API accepts.
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for replacing the shipping address on an order")]
pub struct UpdateShippingAddressArgs {
    /// Identifier of the order to update
    #[validate(length(min = 1, max = 64, message = "Order ID must be between 1 and 64 characters"))]
    #[validate(custom(function = validate_resource_id, message = "Invalid order ID"))]
    #[schemars(description = "Shopify order ID whose shipping address is replaced")]
    pub order_id: String,
    /// New shipping address, passed through verbatim
    #[schemars(
        description = "Shipping address fields (address1, city, country, zip, ...) forwarded unmodified"
    )]
    pub address: ShippingAddress,
}

/// Arguments for the cancel_order tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for cancelling an order")]
pub struct CancelOrderArgs {
    /// Identifier of the order to cancel
    #[validate(length(min = 1, max = 64, message = "Order ID must be between 1 and 64 characters"))]
    #[validate(custom(function = validate_resource_id, message = "Invalid order ID"))]
    #[schemars(description = "Shopify order ID to cancel")]
    pub order_id: String,
}

// Custom validation functions

/// Validate a resource identifier destined for a URL path segment
///
/// Identifiers are substituted into endpoint paths, so anything that could
/// alter the path shape (slashes, dots, whitespace, percent signs) is
/// rejected here rather than forwarded upstream.
fn validate_resource_id(id: &str) -> Result<(), validator::ValidationError> {
    if id.is_empty() {
        return Err(validator::ValidationError::new("Resource ID cannot be empty"));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(validator::ValidationError::new(
            "Resource ID can only contain letters, numbers, underscores, and hyphens",
        ));
    }

    Ok(())
}
