//! # Bridge Configuration
//!
//! Layered configuration for the host-boundary adapter: YAML files with
//! environment-specific overrides, then `CANVAS_BRIDGE__*` environment
//! variables on top.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use canvas_bridge::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let context_type = &manager.config().context_type;
//! # Ok(())
//! # }
//! ```

pub mod loader;

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

pub use loader::ConfigManager;

/// Root configuration for a [`crate::bridge::CanvasBridge`]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Context type requested from host surfaces (`"2d"` for canvas)
    pub context_type: String,

    /// Log overwrites of an existing identifier at warn level
    pub warn_on_overwrite: bool,

    /// Initial capacity of each category registry
    pub initial_capacity: usize,

    pub logging: LoggingConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            context_type: "2d".to_string(),
            warn_on_overwrite: false,
            initial_capacity: 16,
            logging: LoggingConfig::default(),
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.context_type.trim().is_empty() {
            return Err(BridgeError::ConfigurationError(
                "context_type must not be empty".to_string(),
            ));
        }

        if let Some(level) = &self.logging.level {
            EnvFilter::try_new(level).map_err(|e| {
                BridgeError::ConfigurationError(format!("Invalid logging.level '{level}': {e}"))
            })?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive; falls back to `RUST_LOG`, then an environment default
    pub level: Option<String>,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}
