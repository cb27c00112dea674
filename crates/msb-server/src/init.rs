//! Server Initialization
//!
//! Handles server startup: configuration loading, logging, Admin API client
//! construction, and transport selection.
//!
//! # Transport Modes
//!
//! The server supports three transport modes configured via `ServerConfig.transport`:
//!
//! - **Stdio**: Traditional MCP protocol over stdin/stdout
//! - **Http**: HTTP JSON-RPC endpoint with Server-Sent Events (default)
//! - **Hybrid**: Both Stdio and HTTP running simultaneously
//!
//! # Configuration
//!
//! Transport mode can be set via:
//! - Config file: `server.transport = "stdio"`
//! - Environment variable: `MSB_SERVER_TRANSPORT=stdio`
//! - CLI flag: `--stdio` (overrides both)

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use msb_infrastructure::config::TransportMode;
use msb_infrastructure::constants::HTTP_REQUEST_TIMEOUT_SECS;
use msb_shopify::AdminClient;
use tracing::{error, info};

use crate::McpServer;
use crate::transport::http::{HttpTransport, HttpTransportConfig};
use crate::transport::stdio::StdioServerExt;

/// Run the MCP Shopify Bridge server
///
/// This is the main entry point that initializes all components and starts
/// the server. It handles configuration loading, client construction, and
/// MCP server startup.
///
/// # Transport Mode Selection
///
/// The transport mode is determined by `config.server.transport`, except
/// when `stdio_mode` is set: the `--stdio` CLI flag always wins, so IDE and
/// agent launch commands work against any config file.
pub async fn run(
    config_path: Option<&Path>,
    stdio_mode: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    msb_infrastructure::logging::init_logging(config.logging.clone())?;

    info!(
        transport = ?config.server.transport,
        host = %config.server.host,
        port = %config.server.port,
        store = %config.shopify.store,
        "Starting MCP Shopify Bridge server"
    );

    let transport = if stdio_mode {
        TransportMode::Stdio
    } else {
        config.server.transport
    };
    let http_host = config.server.host.clone();
    let http_port = config.server.port;
    let enable_cors = config.server.cors;

    let server = create_mcp_server(&config)?;
    info!("MCP server initialized successfully");

    start_transport(server, transport, &http_host, http_port, enable_cors).await
}

/// Load configuration from optional path
fn load_config(
    config_path: Option<&Path>,
) -> Result<msb_infrastructure::config::AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => msb_infrastructure::config::ConfigLoader::new().with_config_path(path),
        None => msb_infrastructure::config::ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Create the MCP server with the production Admin API client
///
/// Credentials are not validated here. An empty store or token is forwarded
/// as-is and surfaces as an upstream authentication failure on the first
/// tool call, which keeps local behavior identical to the remote contract.
fn create_mcp_server(
    config: &msb_infrastructure::config::AppConfig,
) -> Result<McpServer, Box<dyn std::error::Error>> {
    let client = AdminClient::new(
        config.shopify.store.clone(),
        config.shopify.token.clone(),
        config.shopify.version.clone(),
        None,
        Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS),
    )?;

    Ok(McpServer::new(Arc::new(client)))
}

/// Start the appropriate transport based on configuration
async fn start_transport(
    server: McpServer,
    transport: TransportMode,
    http_host: &str,
    http_port: u16,
    enable_cors: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match transport {
        TransportMode::Stdio => {
            info!("Starting stdio transport");
            run_stdio_transport(server).await
        }
        TransportMode::Http => {
            info!(host = %http_host, port = http_port, "Starting HTTP transport");
            run_http_transport(server, http_host, http_port, enable_cors).await
        }
        TransportMode::Hybrid => {
            info!(
                host = %http_host,
                port = http_port,
                "Starting hybrid transport (stdio + HTTP)"
            );
            run_hybrid_transport(server, http_host, http_port, enable_cors).await
        }
    }
}

/// Run the server with stdio transport only
///
/// This is the traditional MCP transport mode, communicating over
/// stdin/stdout. Used for CLI tools and IDE/agent integrations.
async fn run_stdio_transport(server: McpServer) -> Result<(), Box<dyn std::error::Error>> {
    server.serve_stdio().await
}

/// Run the server with HTTP transport only
///
/// Starts an HTTP server that handles MCP JSON-RPC requests and provides
/// Server-Sent Events for server-to-client notifications.
async fn run_http_transport(
    server: McpServer,
    host: &str,
    port: u16,
    enable_cors: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let http_config = HttpTransportConfig {
        host: host.to_string(),
        port,
        enable_cors,
    };

    let http_transport = HttpTransport::new(http_config, Arc::new(server));
    http_transport
        .start()
        .await
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

/// Run the server with both stdio and HTTP transports simultaneously
///
/// Spawns both transports as concurrent tasks. This allows the server to
/// serve CLI tools via stdin/stdout and web clients via HTTP at once.
///
/// If either transport fails, the error is logged and the other continues.
/// The function returns when both transports have finished.
async fn run_hybrid_transport(
    server: McpServer,
    host: &str,
    port: u16,
    enable_cors: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Clone server for each transport (McpServer is Clone)
    let stdio_server = server.clone();
    let http_server = Arc::new(server);
    let http_host = host.to_string();

    let stdio_handle = tokio::spawn(async move {
        info!("Hybrid: starting stdio transport");
        if let Err(e) = stdio_server.serve_stdio().await {
            error!(error = %e, "Hybrid: stdio transport failed");
        }
        info!("Hybrid: stdio transport finished");
    });

    let http_handle = tokio::spawn(async move {
        info!("Hybrid: starting HTTP transport on {}:{}", http_host, port);
        let http_config = HttpTransportConfig {
            host: http_host,
            port,
            enable_cors,
        };

        let http_transport = HttpTransport::new(http_config, http_server);
        if let Err(e) = http_transport.start().await {
            error!(error = %e, "Hybrid: HTTP transport failed");
        }
        info!("Hybrid: HTTP transport finished");
    });

    // Wait for both transports to finish (join keeps both running)
    let (stdio_result, http_result) = tokio::join!(stdio_handle, http_handle);

    if let Err(e) = stdio_result {
        error!(error = %e, "Hybrid: stdio transport task panicked");
    } else {
        info!("Hybrid: stdio transport task completed");
    }

    if let Err(e) = http_result {
        error!(error = %e, "Hybrid: HTTP transport task panicked");
    } else {
        info!("Hybrid: HTTP transport task completed");
    }

    Ok(())
}
