//! Shopify Client Constants
//!
//! Constants specific to the Admin API client. These are separated from
//! domain constants (which live in msb-domain) and infrastructure constants.

// ============================================================================
// HTTP HEADER CONSTANTS
// ============================================================================

/// Header carrying the Admin API access token
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Content type for Admin API requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// ERROR MESSAGE CONSTANTS
// ============================================================================

/// Error message for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
