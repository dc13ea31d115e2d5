//! Host lookup seam.
//!
//! The bridge never constructs contexts itself. A host implements
//! [`SurfaceProvider`] to turn an element identifier into a surface element
//! and a surface element into a rendering context, the way a page runtime
//! does with `getElementById(id).getContext("2d")`.

/// Host-side resolution of surface elements and their rendering contexts
pub trait SurfaceProvider {
    /// Host representation of a drawable surface element
    type Element;

    /// Rendering context handle handed to the bridge
    type Context;

    /// Find the surface element registered under `element_id`
    fn find_element(&self, element_id: &str) -> Option<Self::Element>;

    /// Obtain a context of `context_type` from `element`
    fn context(&self, element: &Self::Element, context_type: &str) -> Option<Self::Context>;
}

impl<T: SurfaceProvider + ?Sized> SurfaceProvider for &T {
    type Element = T::Element;
    type Context = T::Context;

    fn find_element(&self, element_id: &str) -> Option<Self::Element> {
        (**self).find_element(element_id)
    }

    fn context(&self, element: &Self::Element, context_type: &str) -> Option<Self::Context> {
        (**self).context(element, context_type)
    }
}
