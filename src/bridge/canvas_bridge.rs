//! # Canvas Bridge
//!
//! Host-boundary adapter owning one named registry per resource category.
//!
//! ## Architecture
//!
//! The bridge is constructed explicitly at adapter startup and handed to
//! whichever component talks to the host. There is no process-wide
//! instance: two bridges never see each other's entries.
//!
//! ## Usage
//!
//! ```rust
//! use canvas_bridge::bridge::CanvasBridge;
//! use canvas_bridge::config::BridgeConfig;
//!
//! let bridge: CanvasBridge<&str> = CanvasBridge::new(BridgeConfig::default());
//!
//! bridge.add_context("main", "ctx1");
//! assert_eq!(bridge.get_context("main"), Some("ctx1"));
//!
//! let gradient = bridge
//!     .create_linear_gradient("overlay", 0.0, 0.0, 320.0, 0.0)
//!     .unwrap();
//! gradient.write().add_color_stop(0.0, "#ff00ff").unwrap();
//! assert!(bridge.get_context("overlay").is_none());
//!
//! bridge.remove_context("main");
//! assert!(bridge.get_context("main").is_none());
//! ```

use super::provider::SurfaceProvider;
use super::types::BridgeStats;
use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::logging::log_bridge_operation;
use crate::registry::{NamedHandleRegistry, ResourceKind};
use crate::surface::{Gradient, ImageData, Rect, SharedGradient, SharedImageData};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Named registries for rendering contexts (`C`), gradients (`G`) and pixel
/// buffers (`P`)
pub struct CanvasBridge<C, G = SharedGradient, P = SharedImageData> {
    config: BridgeConfig,
    contexts: NamedHandleRegistry<C>,
    gradients: NamedHandleRegistry<G>,
    pixel_buffers: NamedHandleRegistry<P>,
}

impl<C, G, P> CanvasBridge<C, G, P> {
    /// Create a bridge with three empty registries
    pub fn new(config: BridgeConfig) -> Self {
        debug!(
            context_type = %config.context_type,
            initial_capacity = config.initial_capacity,
            "Creating canvas bridge"
        );

        Self {
            contexts: Self::registry(&config, ResourceKind::Context),
            gradients: Self::registry(&config, ResourceKind::Gradient),
            pixel_buffers: Self::registry(&config, ResourceKind::PixelBuffer),
            config,
        }
    }

    fn registry<H>(config: &BridgeConfig, kind: ResourceKind) -> NamedHandleRegistry<H> {
        NamedHandleRegistry::with_capacity(kind, config.initial_capacity)
            .with_overwrite_warnings(config.warn_on_overwrite)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn contexts(&self) -> &NamedHandleRegistry<C> {
        &self.contexts
    }

    pub fn gradients(&self) -> &NamedHandleRegistry<G> {
        &self.gradients
    }

    pub fn pixel_buffers(&self) -> &NamedHandleRegistry<P> {
        &self.pixel_buffers
    }

    pub fn add_context(&self, identifier: impl Into<String>, context: C) -> Option<C> {
        self.contexts.add(identifier, context)
    }

    pub fn remove_context(&self, identifier: &str) -> Option<C> {
        self.contexts.remove(identifier)
    }

    pub fn add_gradient(&self, identifier: impl Into<String>, gradient: G) -> Option<G> {
        self.gradients.add(identifier, gradient)
    }

    pub fn remove_gradient(&self, identifier: &str) -> Option<G> {
        self.gradients.remove(identifier)
    }

    pub fn add_pixel_buffer(&self, identifier: impl Into<String>, buffer: P) -> Option<P> {
        self.pixel_buffers.add(identifier, buffer)
    }

    pub fn remove_pixel_buffer(&self, identifier: &str) -> Option<P> {
        self.pixel_buffers.remove(identifier)
    }

    pub fn stats(&self) -> BridgeStats {
        BridgeStats {
            contexts: self.contexts.len(),
            gradients: self.gradients.len(),
            pixel_buffers: self.pixel_buffers.len(),
        }
    }
}

impl<C: Clone, G, P> CanvasBridge<C, G, P> {
    pub fn get_context(&self, identifier: &str) -> Option<C> {
        self.contexts.get(identifier)
    }

    /// Resolve `element_id` through the host and register its context under
    /// the same identifier.
    ///
    /// Nothing is registered when the element or its context cannot be
    /// obtained.
    pub fn attach_canvas<S>(&self, provider: &S, element_id: &str) -> Result<C>
    where
        S: SurfaceProvider<Context = C> + ?Sized,
    {
        let context_type = self.config.context_type.as_str();

        let element = provider.find_element(element_id).ok_or_else(|| {
            warn!(element_id = element_id, "Surface element not found");
            BridgeError::SurfaceNotFound {
                element_id: element_id.to_string(),
            }
        })?;

        let context = provider.context(&element, context_type).ok_or_else(|| {
            warn!(
                element_id = element_id,
                context_type = context_type,
                "Surface refused rendering context"
            );
            BridgeError::ContextUnavailable {
                element_id: element_id.to_string(),
                context_type: context_type.to_string(),
            }
        })?;

        self.contexts.add(element_id, context.clone());
        log_bridge_operation("attach_canvas", ResourceKind::Context, element_id, "attached");
        Ok(context)
    }
}

impl<C, G: Clone, P> CanvasBridge<C, G, P> {
    pub fn get_gradient(&self, identifier: &str) -> Option<G> {
        self.gradients.get(identifier)
    }
}

impl<C, G, P: Clone> CanvasBridge<C, G, P> {
    pub fn get_pixel_buffer(&self, identifier: &str) -> Option<P> {
        self.pixel_buffers.get(identifier)
    }
}

impl<C> CanvasBridge<C, SharedGradient, SharedImageData> {
    /// Create a linear gradient and register it under `name`
    pub fn create_linear_gradient(
        &self,
        name: &str,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    ) -> Result<SharedGradient> {
        let gradient = Arc::new(RwLock::new(Gradient::linear(x0, y0, x1, y1)?));
        self.gradients.add(name, gradient.clone());
        log_bridge_operation("create_linear_gradient", ResourceKind::Gradient, name, "created");
        Ok(gradient)
    }

    /// Create a radial gradient and register it under `name`
    #[allow(clippy::too_many_arguments)]
    pub fn create_radial_gradient(
        &self,
        name: &str,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
    ) -> Result<SharedGradient> {
        let gradient = Arc::new(RwLock::new(Gradient::radial(x0, y0, r0, x1, y1, r1)?));
        self.gradients.add(name, gradient.clone());
        log_bridge_operation("create_radial_gradient", ResourceKind::Gradient, name, "created");
        Ok(gradient)
    }

    /// Create a transparent pixel buffer and register it under `name`
    pub fn create_image_data(&self, name: &str, width: u32, height: u32) -> Result<SharedImageData> {
        let buffer = Arc::new(RwLock::new(ImageData::new(width, height)?));
        self.pixel_buffers.add(name, buffer.clone());
        log_bridge_operation("create_image_data", ResourceKind::PixelBuffer, name, "created");
        Ok(buffer)
    }

    /// Copy a region of the buffer registered as `source` into a new buffer
    /// registered as `name`
    pub fn get_image_data(
        &self,
        source: &str,
        name: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<SharedImageData> {
        let source_buffer = self
            .pixel_buffers
            .get(source)
            .ok_or_else(|| BridgeError::not_registered(ResourceKind::PixelBuffer, source))?;

        let region = source_buffer.read().region(x, y, width, height)?;
        let buffer = Arc::new(RwLock::new(region));
        self.pixel_buffers.add(name, buffer.clone());
        log_bridge_operation("get_image_data", ResourceKind::PixelBuffer, name, "copied");
        Ok(buffer)
    }

    /// Write the buffer registered as `source` into the one registered as
    /// `target` at `(dx, dy)`
    pub fn put_image_data(
        &self,
        source: &str,
        target: &str,
        dx: i64,
        dy: i64,
        dirty: Option<Rect>,
    ) -> Result<()> {
        let source_buffer = self
            .pixel_buffers
            .get(source)
            .ok_or_else(|| BridgeError::not_registered(ResourceKind::PixelBuffer, source))?;
        let target_buffer = self
            .pixel_buffers
            .get(target)
            .ok_or_else(|| BridgeError::not_registered(ResourceKind::PixelBuffer, target))?;

        // Never hold both locks: the source may be the target, and two
        // callers may put in opposite directions.
        let snapshot = source_buffer.read().clone();
        target_buffer.write().put(&snapshot, dx, dy, dirty);

        debug!(source = source, target = target, dx = dx, dy = dy, "Image data written");
        Ok(())
    }
}

impl<C, G, P> Default for CanvasBridge<C, G, P> {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl<C, G, P> std::fmt::Debug for CanvasBridge<C, G, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasBridge")
            .field("context_type", &self.config.context_type)
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Rgba;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeContext {
        element: String,
        kind: String,
    }

    struct FakeDocument {
        elements: HashMap<String, Vec<&'static str>>,
    }

    impl FakeDocument {
        fn with_canvas(id: &str) -> Self {
            let mut elements = HashMap::new();
            elements.insert(id.to_string(), vec!["2d"]);
            Self { elements }
        }
    }

    impl SurfaceProvider for FakeDocument {
        type Element = (String, Vec<&'static str>);
        type Context = FakeContext;

        fn find_element(&self, element_id: &str) -> Option<Self::Element> {
            self.elements
                .get(element_id)
                .map(|kinds| (element_id.to_string(), kinds.clone()))
        }

        fn context(&self, element: &Self::Element, context_type: &str) -> Option<FakeContext> {
            element.1.iter().any(|kind| *kind == context_type).then(|| FakeContext {
                element: element.0.clone(),
                kind: context_type.to_string(),
            })
        }
    }

    #[test]
    fn test_attach_canvas_registers_context() {
        let bridge: CanvasBridge<FakeContext> = CanvasBridge::default();
        let document = FakeDocument::with_canvas("canvas");

        let context = bridge.attach_canvas(&document, "canvas").unwrap();

        assert_eq!(context.kind, "2d");
        assert_eq!(context.element, "canvas");
        assert_eq!(bridge.get_context("canvas"), Some(context));
    }

    #[test]
    fn test_attach_canvas_missing_element() {
        let bridge: CanvasBridge<FakeContext> = CanvasBridge::default();
        let document = FakeDocument::with_canvas("canvas");

        let err = bridge.attach_canvas(&document, "other").unwrap_err();

        assert_eq!(
            err,
            BridgeError::SurfaceNotFound {
                element_id: "other".to_string()
            }
        );
        assert!(bridge.contexts().is_empty());
    }

    #[test]
    fn test_attach_canvas_unsupported_context_type() {
        let config = BridgeConfig {
            context_type: "webgl".to_string(),
            ..BridgeConfig::default()
        };
        let bridge: CanvasBridge<FakeContext> = CanvasBridge::new(config);
        let document = FakeDocument::with_canvas("canvas");

        let err = bridge.attach_canvas(&document, "canvas").unwrap_err();

        assert!(matches!(err, BridgeError::ContextUnavailable { .. }));
        assert!(bridge.get_context("canvas").is_none());
    }

    #[test]
    fn test_create_image_data_registers_buffer() {
        let bridge: CanvasBridge<()> = CanvasBridge::default();
        let buffer = bridge.create_image_data("pixels", 4, 4).unwrap();

        let fetched = bridge.get_pixel_buffer("pixels").unwrap();
        assert!(Arc::ptr_eq(&buffer, &fetched));
        assert_eq!(fetched.read().width(), 4);
    }

    #[test]
    fn test_create_image_data_invalid_size_registers_nothing() {
        let bridge: CanvasBridge<()> = CanvasBridge::default();
        assert!(bridge.create_image_data("pixels", 0, 4).is_err());
        assert!(bridge.get_pixel_buffer("pixels").is_none());
    }

    #[test]
    fn test_put_image_data_onto_itself() {
        let bridge: CanvasBridge<()> = CanvasBridge::default();
        let buffer = bridge.create_image_data("pixels", 2, 1).unwrap();
        buffer.write().set_pixel(0, 0, Rgba::rgb(9, 9, 9));

        bridge.put_image_data("pixels", "pixels", 1, 0, None).unwrap();

        assert_eq!(buffer.read().pixel(1, 0), Some(Rgba::rgb(9, 9, 9)));
    }

    #[test]
    fn test_stats_track_categories() {
        let bridge: CanvasBridge<u8> = CanvasBridge::default();
        bridge.add_context("a", 1);
        bridge.create_linear_gradient("g", 0.0, 0.0, 1.0, 1.0).unwrap();

        let stats = bridge.stats();
        assert_eq!(stats.contexts, 1);
        assert_eq!(stats.gradients, 1);
        assert_eq!(stats.pixel_buffers, 0);
        assert_eq!(stats.total(), 2);
    }
}
