//! Admin API URL construction
//!
//! Every operation is statically bound to an HTTP method and a URL path
//! template parameterized by one identifier. The identifier is substituted
//! into the template as supplied; callers validate it before it gets here.

/// Build the Admin API base URL for a store domain and API version
///
/// The store domain carries no scheme; the Admin API is always HTTPS.
pub fn admin_base(store: &str, version: &str) -> String {
    format!("https://{store}/admin/api/{version}")
}

/// URL for fetching a single order
pub fn order_url(base: &str, order_id: &str) -> String {
    format!("{base}/orders/{order_id}.json")
}

/// URL for creating a refund on an order
pub fn refund_url(base: &str, order_id: &str) -> String {
    format!("{base}/orders/{order_id}/refund.json")
}

/// URL for fetching a single customer
pub fn customer_url(base: &str, customer_id: &str) -> String {
    format!("{base}/customers/{customer_id}.json")
}

/// URL for fetching a single product
pub fn product_url(base: &str, product_id: &str) -> String {
    format!("{base}/products/{product_id}.json")
}

/// URL for cancelling an order
pub fn cancel_url(base: &str, order_id: &str) -> String {
    format!("{base}/orders/{order_id}/cancel.json")
}
