//! MCP Shopify Bridge Server
//!
//! MCP tool server that exposes a Shopify store's Admin REST API as six
//! tools. Every tool call forwards exactly one authenticated HTTP request
//! and returns the raw JSON response.
//!
//! ## Operating Modes
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **HTTP** | `msb` (default) | JSON-RPC endpoint + SSE on the configured port |
//! | **Stdio** | `msb --stdio` | MCP over stdin/stdout for IDE/agent hosts |
//! | **Hybrid** | `msb` (config: `server.transport = "hybrid"`) | Both at once |
//!
//! ## Architecture
//!
//! - Domain layer: Gateway contract and shared types (msb-domain)
//! - Infrastructure: Configuration and logging (msb-infrastructure)
//! - Shopify client: Admin REST API forwarder (msb-shopify)
//! - Server: Transport and protocol layer (msb-server)

use clap::Parser;
use msb_server::run;

/// Command line interface for MCP Shopify Bridge
#[derive(Parser, Debug)]
#[command(name = "msb")]
#[command(about = "MCP Shopify Bridge - Shopify Admin API as MCP tools")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Serve MCP over stdin/stdout instead of HTTP
    ///
    /// When this flag is set, the bridge ignores the configured transport
    /// and speaks the MCP protocol on standard input/output. This is the
    /// mode IDE and agent hosts use when they spawn the server themselves.
    #[arg(long, help = "Serve MCP over stdio")]
    pub stdio: bool,
}

/// Main entry point for the MCP Shopify Bridge
///
/// Dispatches to the appropriate transport based on CLI flags and
/// configuration:
/// - `--stdio` flag: MCP over stdin/stdout
/// - Config `server.transport`: `http` (default), `stdio`, or `hybrid`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.stdio).await
}
