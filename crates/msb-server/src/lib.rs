//! # MCP Shopify Bridge Server
//!
//! MCP protocol server exposing Shopify Admin API operations as tools.
//!
//! ## Features
//!
//! - **Order Tools**: Fetch, refund, and cancel orders, or replace their
//!   shipping address
//! - **Lookup Tools**: Fetch customers and products by identifier
//! - **Verbatim Passthrough**: Tool results carry the upstream JSON body
//!   unmodified; the bridge never reshapes responses
//! - **Dual Transport**: MCP over stdio for IDE/agent integrations, or an
//!   HTTP JSON-RPC endpoint with SSE for web clients
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msb_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Run with default config (XDG paths + environment)
//!     // stdio_mode = false uses config to determine the transport
//!     run(None, false).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! This crate implements the transport and protocol layer for the MCP Shopify
//! Bridge. It depends on the domain gateway contract and infrastructure
//! services; the concrete Admin API client is injected at startup.
//!
//! ## Core Types
//!
//! The most important types for users:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | Main server struct |
//! | [`run`] | Entry point wiring config, client, and transport |

// Allow Rust 2024 compatibility issues from Rocket's EventStream macro
#![allow(rust_2024_compatibility)]

pub mod args;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

// Re-export core types for public API
pub use init::run;
pub use mcp_server::McpServer;
