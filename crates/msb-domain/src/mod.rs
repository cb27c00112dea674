//! # Domain Layer
//!
//! Core contracts and types for the MCP Shopify Bridge.
//!
//! This crate defines the business-facing surface of the system: the
//! [`CommerceGateway`] port that the server layer calls, the error type every
//! layer shares, and the value objects that cross the tool boundary. It has
//! no knowledge of transports, configuration, or HTTP clients.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Shared error type and `Result` alias |
//! | [`ports`] | Boundary contracts implemented by outer layers |
//! | [`value_objects`] | Types that cross the tool boundary |
//! | [`constants`] | Domain-level constants |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use ports::CommerceGateway;
pub use value_objects::ShippingAddress;
