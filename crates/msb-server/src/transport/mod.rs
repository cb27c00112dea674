//! MCP Transport Layer
//!
//! Transport implementations for the MCP protocol.
//! Handles different transport mechanisms (stdio, HTTP).
//!
//! ## Available Transports
//!
//! | Transport | Description | Use Case |
//! |-----------|-------------|----------|
//! | [`stdio`] | Standard I/O streams | CLI tools, IDE/agent integrations |
//! | [`http`] | HTTP server with SSE | Web clients, JSON-RPC over REST |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use msb_server::McpServer;
//! use msb_server::transport::http::{HttpTransport, HttpTransportConfig};
//! use msb_server::transport::stdio::StdioServerExt;
//!
//! let server = McpServer::new(/* ... */);
//!
//! // Stdio transport (traditional MCP)
//! server.serve_stdio().await?;
//!
//! // HTTP transport
//! let http = HttpTransport::new(config, Arc::new(server));
//! http.start().await?;
//! ```

pub mod http;
pub mod stdio;
pub mod types;

// Re-export transport types
pub use http::{HttpTransport, HttpTransportConfig};
pub use stdio::StdioServerExt;
pub use types::{McpError, McpRequest, McpResponse};

// Re-export TransportMode from infrastructure config (single source of truth)
pub use msb_infrastructure::config::TransportMode;
