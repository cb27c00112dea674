//! Shopify Admin API client
//!
//! Implements the `CommerceGateway` port with one authenticated HTTP request
//! per operation. Responses are passed through verbatim.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use tracing::debug;

use msb_domain::error::{Error, Result};
use msb_domain::ports::CommerceGateway;
use msb_domain::value_objects::ShippingAddress;

use crate::constants::{ACCESS_TOKEN_HEADER, CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT};
use crate::endpoints;
use crate::response::check_and_parse;

/// Shopify Admin API client
///
/// Forwards each gateway operation as a single authenticated request to the
/// Admin REST API and returns the parsed JSON body unchanged. No retries,
/// no response reshaping, no upstream status interpretation.
///
/// ## Example
///
/// ```rust,no_run
/// use msb_shopify::AdminClient;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let _client = AdminClient::new(
///         "my-shop.myshopify.com".to_string(),
///         "shpat_access_token".to_string(),
///         "2024-07".to_string(),
///         None,
///         Duration::from_secs(30),
///     )?;
///     Ok(())
/// }
/// ```
pub struct AdminClient {
    store: String,
    token: String,
    version: String,
    base_url: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl AdminClient {
    /// Create a new Admin API client
    ///
    /// # Arguments
    /// * `store` - Store domain, e.g. `my-shop.myshopify.com`
    /// * `token` - Admin API access token
    /// * `version` - Admin API version segment, e.g. `2024-07`
    /// * `base_url` - Optional base URL override (used by tests)
    /// * `timeout` - Request timeout duration
    pub fn new(
        store: String,
        token: String,
        version: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("msb/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::internal_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            store,
            token,
            version,
            base_url,
            timeout,
            http_client,
        })
    }

    /// Get the store domain this client talks to
    pub fn store(&self) -> &str {
        &self.store
    }

    /// Get the Admin API base URL for this client
    pub fn api_base(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| endpoints::admin_base(&self.store, &self.version))
    }

    /// Send one authenticated request and parse the response
    async fn send_request(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
        let started = Instant::now();

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .header(ACCESS_TOKEN_HEADER, &self.token)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout);

        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
            } else {
                Error::network_with_source(format!("HTTP request failed: {}", e), e)
            }
        })?;

        debug!(
            method = %method,
            url = url,
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Admin API request completed"
        );

        check_and_parse(response).await
    }
}

#[async_trait]
impl CommerceGateway for AdminClient {
    async fn get_order(&self, order_id: &str) -> Result<Value> {
        let url = endpoints::order_url(&self.api_base(), order_id);
        self.send_request(Method::GET, &url, None).await
    }

    async fn refund_order(&self, order_id: &str) -> Result<Value> {
        let url = endpoints::refund_url(&self.api_base(), order_id);
        self.send_request(Method::POST, &url, None).await
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Value> {
        let url = endpoints::customer_url(&self.api_base(), customer_id);
        self.send_request(Method::GET, &url, None).await
    }

    async fn get_product(&self, product_id: &str) -> Result<Value> {
        let url = endpoints::product_url(&self.api_base(), product_id);
        self.send_request(Method::GET, &url, None).await
    }

    async fn update_shipping_address(
        &self,
        order_id: &str,
        address: &ShippingAddress,
    ) -> Result<Value> {
        let url = endpoints::order_url(&self.api_base(), order_id);
        // The id goes into the body exactly as the caller supplied it
        let payload = json!({
            "order": {
                "id": order_id,
                "shipping_address": address,
            }
        });
        self.send_request(Method::PUT, &url, Some(&payload)).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        let url = endpoints::cancel_url(&self.api_base(), order_id);
        self.send_request(Method::POST, &url, None).await
    }
}
