//! Logging configuration

use crate::constants::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration
///
/// ```toml
/// [logging]
/// level = "info"
/// json = false
/// file = "/var/log/msb/server.log"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit structured JSON instead of human-readable lines
    #[serde(default)]
    pub json: bool,

    /// Optional log file path; when set, a daily-rolling file layer is
    /// added alongside stderr output
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            file: None,
        }
    }
}
