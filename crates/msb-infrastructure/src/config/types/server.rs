//! Server configuration types

use crate::constants::{DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST};
use serde::{Deserialize, Serialize};

/// Transport mode for the MCP server
///
/// Determines how the server accepts protocol traffic:
/// - `Http`: JSON-RPC over HTTP with SSE notifications (default)
/// - `Stdio`: traditional MCP over stdin/stdout, for IDE integrations
/// - `Hybrid`: both transports running simultaneously
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// MCP protocol over stdin/stdout
    Stdio,

    /// HTTP server with Server-Sent Events
    #[default]
    Http,

    /// Stdio and HTTP running simultaneously
    Hybrid,
}

/// Server configuration
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8000
/// transport = "http"    # "stdio", "http", or "hybrid"
/// cors = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind the HTTP transport to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Transport mode
    #[serde(default)]
    pub transport: TransportMode,

    /// Enable CORS headers for browser access
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    DEFAULT_SERVER_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_HTTP_PORT
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            transport: TransportMode::default(),
            cors: default_cors(),
        }
    }
}
