//! Shopify store configuration

use msb_domain::constants::SHOPIFY_API_VERSION;
use serde::{Deserialize, Serialize};

/// Shopify Admin API connection settings
///
/// ```toml
/// [shopify]
/// store = "my-shop.myshopify.com"
/// token = "shpat_..."
/// version = "2024-07"
/// ```
///
/// `store` and `token` may also come from the plain `SHOPIFY_STORE` and
/// `SHOPIFY_TOKEN` environment variables, which take precedence over the
/// TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopifyConfig {
    /// Store domain, e.g. `my-shop.myshopify.com`
    #[serde(default)]
    pub store: String,

    /// Admin API access token
    #[serde(default)]
    pub token: String,

    /// Admin API version segment of the URL path
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    SHOPIFY_API_VERSION.to_string()
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            store: String::new(),
            token: String::new(),
            version: default_version(),
        }
    }
}
