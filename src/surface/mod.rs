//! # Drawing Resources
//!
//! Concrete handle types the bridge can create on behalf of the host:
//! colors, gradients and pixel buffers. Rendering contexts stay opaque and
//! come from the host through [`crate::bridge::SurfaceProvider`].

pub mod color;
pub mod gradient;
pub mod image_data;

use parking_lot::RwLock;
use std::sync::Arc;

pub use color::{from_rgb, Rgba};
pub use gradient::{ColorStop, Gradient, GradientShape};
pub use image_data::{ImageData, Rect, MAX_PIXELS};

/// Gradient handle shared between the registry and the caller
pub type SharedGradient = Arc<RwLock<Gradient>>;

/// Pixel-buffer handle shared between the registry and the caller
pub type SharedImageData = Arc<RwLock<ImageData>>;
