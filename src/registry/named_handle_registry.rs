//! # Named Handle Registry
//!
//! Identifier-keyed store of opaque handles, scoped to one resource category.
//!
//! The registry never inspects, constructs, or drops the resources behind the
//! handles it stores beyond releasing its own copy of the handle. Callers own
//! the lifecycle: an entry lives until it is removed, overwritten, or the
//! registry itself is dropped.
//!
//! ## Usage
//!
//! ```rust
//! use canvas_bridge::registry::{NamedHandleRegistry, ResourceKind};
//! use std::sync::Arc;
//!
//! let registry = NamedHandleRegistry::new(ResourceKind::Context);
//!
//! registry.add("main", Arc::new("ctx-1"));
//! assert_eq!(registry.get("main").as_deref(), Some(&"ctx-1"));
//!
//! registry.remove("main");
//! assert!(registry.get("main").is_none());
//! ```

use super::ResourceKind;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// Identifier → handle store for a single resource category
pub struct NamedHandleRegistry<H> {
    kind: ResourceKind,
    warn_on_overwrite: bool,
    entries: RwLock<HashMap<String, H>>,
}

impl<H> NamedHandleRegistry<H> {
    /// Create an empty registry for the given category
    pub fn new(kind: ResourceKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Create an empty registry with room for `capacity` entries
    pub fn with_capacity(kind: ResourceKind, capacity: usize) -> Self {
        Self {
            kind,
            warn_on_overwrite: false,
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Log overwrites of an existing identifier at warn level instead of debug
    pub fn with_overwrite_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_overwrite = enabled;
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Associate `identifier` with `handle`, replacing any prior association.
    ///
    /// Returns the displaced handle, if there was one.
    pub fn add(&self, identifier: impl Into<String>, handle: H) -> Option<H> {
        let identifier = identifier.into();
        let previous = {
            let mut entries = self.entries.write();
            entries.insert(identifier.clone(), handle)
        };

        if previous.is_some() {
            if self.warn_on_overwrite {
                warn!(kind = %self.kind, identifier = %identifier, "Handle already registered, replacing");
            } else {
                debug!(kind = %self.kind, identifier = %identifier, "Handle replaced");
            }
        } else {
            trace!(kind = %self.kind, identifier = %identifier, "Handle registered");
        }

        previous
    }

    /// Delete the association for `identifier`. Unknown identifiers are a no-op.
    ///
    /// Returns the removed handle, if there was one.
    pub fn remove(&self, identifier: &str) -> Option<H> {
        let removed = self.entries.write().remove(identifier);

        if removed.is_some() {
            trace!(kind = %self.kind, identifier = identifier, "Handle removed");
        }

        removed
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.read().contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<H: Clone> NamedHandleRegistry<H> {
    /// Currently associated handle, or `None` when nothing is registered
    pub fn get(&self, identifier: &str) -> Option<H> {
        self.entries.read().get(identifier).cloned()
    }
}

impl<H> fmt::Debug for NamedHandleRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedHandleRegistry")
            .field("kind", &self.kind)
            .field("entries", &self.len())
            .finish()
    }
}
