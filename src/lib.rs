#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Canvas Bridge
//!
//! Named registry bridge for drawing resources across a host scripting
//! boundary.
//!
//! ## Overview
//!
//! A host (a page-rendering runtime, a scripting engine binding) refers to
//! drawing resources by textual identifier. The bridge resolves those
//! identifiers to live, non-serializable handles: rendering contexts,
//! gradients and pixel buffers. Each category has its own registry; lookups
//! of unknown identifiers yield `None`, never an error.
//!
//! ## Module Organization
//!
//! - [`registry`] - Generic named-handle registry and resource categories
//! - [`bridge`] - Host-boundary adapter and the surface provider seam
//! - [`surface`] - Colors, gradients and image data the bridge can create
//! - [`config`] - Layered configuration loading
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use canvas_bridge::{BridgeConfig, CanvasBridge};
//!
//! let bridge: CanvasBridge<u32> = CanvasBridge::new(BridgeConfig::default());
//!
//! bridge.add_context("main", 1);
//! assert_eq!(bridge.get_context("main"), Some(1));
//! assert_eq!(bridge.get_gradient("main").map(|_| ()), None);
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod surface;

pub use bridge::{BridgeStats, CanvasBridge, SurfaceProvider};
pub use config::{BridgeConfig, ConfigManager, LoggingConfig};
pub use error::{BridgeError, Result};
pub use registry::{NamedHandleRegistry, ResourceKind};
pub use surface::{
    from_rgb, ColorStop, Gradient, GradientShape, ImageData, Rect, Rgba, SharedGradient,
    SharedImageData, MAX_PIXELS,
};
