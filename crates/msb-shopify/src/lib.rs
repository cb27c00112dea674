//! # Shopify Admin API Client
//!
//! Implements the [`msb_domain::ports::CommerceGateway`] port against the
//! Shopify Admin REST API.
//!
//! The client is a thin pass-through: it forwards one authenticated HTTP
//! request per operation and returns the upstream JSON body untouched. It
//! never retries, never reshapes responses, and never interprets upstream
//! status codes beyond success/failure.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `AdminClient` implementing the gateway port |
//! | [`endpoints`] | Admin API URL construction |
//! | [`response`] | Response status checking and JSON decoding |
//! | [`constants`] | Header names and client constants |

pub mod client;
pub mod constants;
pub mod endpoints;
pub mod response;

pub use client::AdminClient;
