//! # Registry Infrastructure
//!
//! Named-handle storage shared by every resource category the bridge tracks.
//!
//! ## Overview
//!
//! A single generic [`NamedHandleRegistry`] is instantiated once per
//! [`ResourceKind`]. Instances are independent: adding `"x"` to the context
//! registry never makes `"x"` resolvable in the gradient registry.
//!
//! ```text
//! CanvasBridge
//! ├── NamedHandleRegistry<C>   (ResourceKind::Context)
//! ├── NamedHandleRegistry<G>   (ResourceKind::Gradient)
//! └── NamedHandleRegistry<P>   (ResourceKind::PixelBuffer)
//! ```

pub mod named_handle_registry;
pub mod resource_kind;

pub use named_handle_registry::NamedHandleRegistry;
pub use resource_kind::ResourceKind;
