use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of drawing resource a registry instance tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Rendering context obtained from a host surface
    Context,
    /// Linear or radial gradient
    Gradient,
    /// RGBA pixel buffer (image data)
    PixelBuffer,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Context,
        ResourceKind::Gradient,
        ResourceKind::PixelBuffer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Context => "context",
            ResourceKind::Gradient => "gradient",
            ResourceKind::PixelBuffer => "pixel_buffer",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        for kind in ResourceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
