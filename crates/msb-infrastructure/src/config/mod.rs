//! Configuration management
//!
//! TOML + environment configuration for the bridge, built on Figment.
//! `types` defines the configuration schema; `loader` merges the sources.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ServerConfig, ShopifyConfig, TransportMode};
