//! Configuration Loader
//!
//! Environment-aware configuration loading. Sources are layered in order,
//! later ones winning:
//!
//! 1. `<dir>/canvas-bridge.yaml`
//! 2. `<dir>/canvas-bridge.<environment>.yaml`
//! 3. `CANVAS_BRIDGE__*` environment variables (`__` separates nested keys)
//!
//! Every layer is optional; with none present the defaults apply.

use super::BridgeConfig;
use crate::error::{BridgeError, Result};
use config::{Config, Environment, File, FileFormat};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_BASENAME: &str = "canvas-bridge";
const ENV_PREFIX: &str = "CANVAS_BRIDGE";

/// Loaded configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: BridgeConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> Result<ConfigManager> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> Result<ConfigManager> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment.
    /// Useful for tests that must not touch process-wide variables.
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> Result<ConfigManager> {
        let config_directory = config_dir.unwrap_or_else(|| PathBuf::from("config"));

        debug!(
            environment = environment,
            directory = %config_directory.display(),
            "Loading bridge configuration"
        );

        let config = Self::build(&config_directory, environment)?;
        config.validate()?;

        debug!(
            environment = environment,
            context_type = %config.context_type,
            "Bridge configuration loaded"
        );

        Ok(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        })
    }

    fn build(config_directory: &Path, environment: &str) -> Result<BridgeConfig> {
        let base = config_directory.join(format!("{CONFIG_BASENAME}.yaml"));
        let overrides = config_directory.join(format!("{CONFIG_BASENAME}.{environment}.yaml"));

        let settings = Config::builder()
            .add_source(File::from(base).format(FileFormat::Yaml).required(false))
            .add_source(
                File::from(overrides)
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<BridgeConfig>().map_err(|e| {
            BridgeError::ConfigurationError(format!(
                "Failed to deserialize configuration from {}: {e}",
                config_directory.display()
            ))
        })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn into_config(self) -> BridgeConfig {
        self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    /// JSON rendering of the loaded configuration for diagnostics
    pub fn debug_config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Detect current environment: CANVAS_BRIDGE_ENV || APP_ENV || 'development'
    pub fn detect_environment() -> String {
        env::var("CANVAS_BRIDGE_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
            .to_lowercase()
    }
}
