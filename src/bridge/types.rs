use serde::{Deserialize, Serialize};

/// Per-category entry counts, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeStats {
    pub contexts: usize,
    pub gradients: usize,
    pub pixel_buffers: usize,
}

impl BridgeStats {
    pub fn total(&self) -> usize {
        self.contexts + self.gradients + self.pixel_buffers
    }
}
