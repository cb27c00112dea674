//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `msb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "msb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "msb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MSB";

// ============================================================================
// LEGACY ENVIRONMENT VARIABLE CONSTANTS
// ============================================================================
// Plain (unprefixed) variables honored for compatibility with existing
// deployments. They override the MSB_-prefixed equivalents.

/// Store domain environment variable
pub const ENV_SHOPIFY_STORE: &str = "SHOPIFY_STORE";

/// Access token environment variable
pub const ENV_SHOPIFY_TOKEN: &str = "SHOPIFY_TOKEN";

/// Listening port environment variable
pub const ENV_PORT: &str = "PORT";

/// Bind host environment variable
pub const ENV_HOST: &str = "HOST";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default server host (all interfaces)
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

// ============================================================================
// HTTP CLIENT CONSTANTS
// ============================================================================

/// Upstream request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for log filter directives
pub const LOG_FILTER_ENV: &str = "MSB_LOG";
