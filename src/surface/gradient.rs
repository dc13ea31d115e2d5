//! # Gradients
//!
//! Linear and radial gradients with ordered color stops, mirroring the
//! canvas `createLinearGradient` / `createRadialGradient` objects.

use super::color::Rgba;
use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};

/// Geometry of a gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GradientShape {
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    Radial {
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    shape: GradientShape,
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Gradient along the line from `(x0, y0)` to `(x1, y1)`
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        ensure_finite(&[x0, y0, x1, y1])?;
        Ok(Self {
            shape: GradientShape::Linear { x0, y0, x1, y1 },
            stops: Vec::new(),
        })
    }

    /// Gradient between the circles `(x0, y0, r0)` and `(x1, y1, r1)`
    pub fn radial(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Result<Self> {
        ensure_finite(&[x0, y0, r0, x1, y1, r1])?;
        if r0 < 0.0 || r1 < 0.0 {
            return Err(BridgeError::InvalidGeometry(format!(
                "radial gradient radii must be non-negative (r0={r0}, r1={r1})"
            )));
        }
        Ok(Self {
            shape: GradientShape::Radial {
                x0,
                y0,
                r0,
                x1,
                y1,
                r1,
            },
            stops: Vec::new(),
        })
    }

    pub fn shape(&self) -> &GradientShape {
        &self.shape
    }

    /// Color stops ordered by offset
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Add a stop from a CSS color string
    pub fn add_color_stop(&mut self, offset: f64, color: &str) -> Result<()> {
        let color: Rgba = color.parse()?;
        self.insert_stop(offset, color)
    }

    /// Add an opaque stop from a packed `0xRRGGBB` value
    pub fn add_color_stop_rgb(&mut self, offset: f64, color: u32) -> Result<()> {
        self.insert_stop(offset, Rgba::from_packed_rgb(color))
    }

    pub fn add_color_stop_rgba(&mut self, offset: f64, color: Rgba) -> Result<()> {
        self.insert_stop(offset, color)
    }

    fn insert_stop(&mut self, offset: f64, color: Rgba) -> Result<()> {
        if !(0.0..=1.0).contains(&offset) {
            return Err(BridgeError::InvalidColorStop(offset));
        }
        // Stops sharing an offset keep their insertion order.
        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        self.stops.insert(index, ColorStop { offset, color });
        Ok(())
    }

    /// Color at position `t` along the gradient.
    ///
    /// Positions before the first stop or after the last one take that
    /// stop's color. `None` when the gradient has no stops.
    pub fn color_at(&self, t: f64) -> Option<Rgba> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        if t.is_nan() || t <= first.offset {
            return Some(first.color);
        }
        if t >= last.offset {
            return Some(last.color);
        }

        let upper = self.stops.partition_point(|stop| stop.offset <= t);
        let before = &self.stops[upper - 1];
        let after = &self.stops[upper];
        let span = after.offset - before.offset;
        if span <= f64::EPSILON {
            return Some(after.color);
        }

        Some(before.color.lerp(&after.color, (t - before.offset) / span))
    }
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(BridgeError::InvalidGeometry(format!(
            "gradient coordinates must be finite: {values:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::color::from_rgb;

    #[test]
    fn test_linear_gradient_collects_sorted_stops() {
        let mut gradient = Gradient::linear(0.0, 0.0, 320.0, 0.0).unwrap();
        gradient.add_color_stop(1.0, "#ff0000").unwrap();
        gradient.add_color_stop(0.0, "#ff00ff").unwrap();
        gradient.add_color_stop(0.5, "#0000ff").unwrap();

        let offsets: Vec<f64> = gradient.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(gradient.stops()[1].color, Rgba::rgb(0, 0, 0xff));
    }

    #[test]
    fn test_equal_offsets_keep_insertion_order() {
        let mut gradient = Gradient::linear(0.0, 0.0, 1.0, 0.0).unwrap();
        gradient.add_color_stop(0.5, "red").unwrap();
        gradient.add_color_stop(0.5, "blue").unwrap();

        assert_eq!(gradient.stops()[0].color, Rgba::rgb(0xff, 0, 0));
        assert_eq!(gradient.stops()[1].color, Rgba::rgb(0, 0, 0xff));
    }

    #[test]
    fn test_packed_rgb_stops() {
        let mut gradient = Gradient::linear(0.0, 0.0, 1.0, 0.0).unwrap();
        gradient.add_color_stop_rgb(0.0, from_rgb(0xff, 0, 0xff)).unwrap();
        assert_eq!(gradient.stops()[0].color, Rgba::rgb(0xff, 0, 0xff));
    }

    #[test]
    fn test_invalid_stops_are_rejected() {
        let mut gradient = Gradient::linear(0.0, 0.0, 1.0, 0.0).unwrap();

        assert_eq!(
            gradient.add_color_stop(1.5, "red"),
            Err(BridgeError::InvalidColorStop(1.5))
        );
        assert!(gradient.add_color_stop(f64::NAN, "red").is_err());
        assert_eq!(
            gradient.add_color_stop(0.5, "nope"),
            Err(BridgeError::InvalidColor("nope".to_string()))
        );
        assert!(gradient.stops().is_empty());
    }

    #[test]
    fn test_radial_rejects_negative_radius() {
        assert!(matches!(
            Gradient::radial(0.0, 0.0, -1.0, 0.0, 0.0, 5.0),
            Err(BridgeError::InvalidGeometry(_))
        ));
        assert!(Gradient::radial(0.0, 0.0, 0.0, 0.0, 0.0, 5.0).is_ok());
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        assert!(Gradient::linear(0.0, f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_color_at_interpolates_and_clamps() {
        let mut gradient = Gradient::linear(0.0, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(gradient.color_at(0.5), None);

        gradient.add_color_stop(0.25, "#000000").unwrap();
        gradient.add_color_stop(0.75, "#ffffff").unwrap();

        assert_eq!(gradient.color_at(0.0), Some(Rgba::rgb(0, 0, 0)));
        assert_eq!(gradient.color_at(1.0), Some(Rgba::rgb(255, 255, 255)));
        assert_eq!(gradient.color_at(0.5), Some(Rgba::rgb(128, 128, 128)));
    }
}
