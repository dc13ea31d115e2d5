use crate::registry::ResourceKind;
use thiserror::Error;

/// Errors raised by the bridge operations that can fail.
///
/// Registry lookups never produce one of these: an unknown identifier is an
/// absent value, not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error("Surface not found: {element_id}")]
    SurfaceNotFound { element_id: String },

    #[error("Context '{context_type}' unavailable for surface {element_id}")]
    ContextUnavailable {
        element_id: String,
        context_type: String,
    },

    #[error("No {kind} registered under '{identifier}'")]
    NotRegistered {
        kind: ResourceKind,
        identifier: String,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Color stop offset {0} outside [0, 1]")]
    InvalidColorStop(f64),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl BridgeError {
    pub(crate) fn not_registered(kind: ResourceKind, identifier: &str) -> Self {
        BridgeError::NotRegistered {
            kind,
            identifier: identifier.to_string(),
        }
    }
}

impl From<config::ConfigError> for BridgeError {
    fn from(err: config::ConfigError) -> Self {
        BridgeError::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
