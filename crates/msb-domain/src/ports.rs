//! Domain Port Interfaces
//!
//! Defines the boundary contract between the tool server and the commerce
//! API client. The server layer depends on this trait; the concrete HTTP
//! implementation lives in the `msb-shopify` crate and is injected at
//! startup. This follows the Dependency Inversion Principle: the domain
//! defines the interface, outer layers implement it.

use crate::error::Result;
use crate::value_objects::ShippingAddress;
use async_trait::async_trait;
use serde_json::Value;

/// Commerce API Gateway
///
/// Business contract for the six order/customer/product operations the
/// bridge exposes as tools. Every method performs exactly one upstream
/// request and returns the decoded JSON response body unmodified; any
/// non-success upstream status surfaces as [`Error::Upstream`].
///
/// [`Error::Upstream`]: crate::error::Error::Upstream
///
/// # Example
///
/// ```ignore
/// use msb_domain::ports::CommerceGateway;
///
/// async fn show_order(gateway: &dyn CommerceGateway) {
///     let order = gateway.get_order("123456789").await?;
///     println!("{}", order["order"]["id"]);
/// }
/// ```
#[async_trait]
pub trait CommerceGateway: Send + Sync {
    /// Fetch a single order by its identifier
    ///
    /// # Arguments
    /// * `order_id` - Identifier of the order to fetch
    ///
    /// # Returns
    /// The upstream order payload as returned by the API
    async fn get_order(&self, order_id: &str) -> Result<Value>;

    /// Issue a refund notification for an order
    ///
    /// # Arguments
    /// * `order_id` - Identifier of the order to refund
    ///
    /// # Returns
    /// The upstream refund payload as returned by the API
    async fn refund_order(&self, order_id: &str) -> Result<Value>;

    /// Fetch a single customer by their identifier
    async fn get_customer(&self, customer_id: &str) -> Result<Value>;

    /// Fetch a single product by its identifier
    async fn get_product(&self, product_id: &str) -> Result<Value>;

    /// Replace the shipping address on an order
    ///
    /// The address mapping is forwarded unchanged inside the request body
    /// envelope; no field of it is validated or normalized locally.
    ///
    /// # Arguments
    /// * `order_id` - Identifier of the order to update
    /// * `address` - New shipping address, passed through verbatim
    ///
    /// # Returns
    /// The upstream updated-order payload as returned by the API
    async fn update_shipping_address(
        &self,
        order_id: &str,
        address: &ShippingAddress,
    ) -> Result<Value>;

    /// Cancel an order
    async fn cancel_order(&self, order_id: &str) -> Result<Value>;
}
