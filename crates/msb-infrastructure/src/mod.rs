//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the domain and server layers.
//!
//! This layer owns everything the bridge needs before it can serve a single
//! tool call: merged configuration (defaults, TOML file, environment),
//! structured logging, and error-context helpers.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration with env and TOML sources |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
