//! # Structured Logging Module
//!
//! Environment-aware structured logging for the bridge and its host.

use crate::config::{ConfigManager, LoggingConfig};
use crate::registry::ResourceKind;
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.level`, otherwise from the detected environment.
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigManager::detect_environment();
        let filter = EnvFilter::try_from_default_env()
            .ok()
            .or_else(|| {
                config
                    .level
                    .as_deref()
                    .and_then(|level| EnvFilter::try_new(level).ok())
            })
            .unwrap_or_else(|| EnvFilter::new(get_log_level(&environment)));

        let layer = if config.json {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // A host binding may already own the global subscriber.
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            json = config.json,
            "Structured logging initialized"
        );
    });
}

/// Log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Log a bridge operation that creates or resolves a resource
pub fn log_bridge_operation(operation: &str, kind: ResourceKind, identifier: &str, status: &str) {
    tracing::info!(
        operation = %operation,
        kind = %kind,
        identifier = %identifier,
        status = %status,
        timestamp = %Utc::now().to_rfc3339(),
        "BRIDGE_OPERATION"
    );
}
