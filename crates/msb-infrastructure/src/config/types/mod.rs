//! Configuration schema types

mod app;
mod logging;
mod server;
mod shopify;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use server::{ServerConfig, TransportMode};
pub use shopify::ShopifyConfig;
