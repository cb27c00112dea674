//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the outer layers. Infrastructure-specific constants remain in
//! `msb_infrastructure::constants`.

// ============================================================================
// COMMERCE API CONSTANTS
// ============================================================================

/// Admin API version pinned for all upstream requests
pub const SHOPIFY_API_VERSION: &str = "2024-07";
