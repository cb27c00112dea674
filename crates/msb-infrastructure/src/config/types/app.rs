//! Top-level application configuration

use super::{LoggingConfig, ServerConfig, ShopifyConfig};
use serde::{Deserialize, Serialize};

/// Complete application configuration
///
/// Assembled by [`crate::config::ConfigLoader`] from built-in defaults,
/// an optional TOML file, and environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server transport settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Shopify Admin API credentials
    #[serde(default)]
    pub shopify: ShopifyConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
