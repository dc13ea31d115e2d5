//! # Host Boundary
//!
//! The adapter a host scripting boundary talks to: add, get and remove
//! named contexts, gradients and pixel buffers, plus host-side surface
//! resolution through [`SurfaceProvider`].

pub mod canvas_bridge;
pub mod provider;
pub mod types;

pub use canvas_bridge::CanvasBridge;
pub use provider::SurfaceProvider;
pub use types::BridgeStats;
