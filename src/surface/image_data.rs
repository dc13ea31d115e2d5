//! # Image Data
//!
//! Owned RGBA pixel buffers, the handle type behind the pixel-buffer
//! registry. Region reads and writes follow the canvas
//! `getImageData` / `putImageData` rules: reads outside the buffer yield
//! transparent black, writes are clipped to both buffers.

use super::color::Rgba;
use crate::error::{BridgeError, Result};

const BYTES_PER_PIXEL: usize = 4;

/// Largest pixel count a single buffer may hold (16384 × 16384)
pub const MAX_PIXELS: u64 = 1 << 28;

/// Axis-aligned rectangle in pixel coordinates. Width and height may be
/// negative; [`Rect::normalized`] flips them to the positive form.
///
/// Edge arithmetic saturates at the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn normalized(self) -> Self {
        let (x, width) = if self.width < 0 {
            (self.x.saturating_add(self.width), self.width.saturating_neg())
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0 {
            (self.y.saturating_add(self.height), self.height.saturating_neg())
        } else {
            (self.y, self.height)
        };
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        (x1 > x0 && y1 > y0)
            .then(|| Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)))
    }

    fn right(self) -> i64 {
        self.x.saturating_add(self.width)
    }

    fn bottom(self) -> i64 {
        self.y.saturating_add(self.height)
    }
}

/// Row-major RGBA pixel buffer, 4 bytes per pixel
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageData {
    /// Transparent black buffer of `width × height` pixels
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap existing RGBA bytes; `data` must hold exactly `width × height × 4` bytes
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let len = buffer_len(width, height)?;
        if data.len() != len {
            return Err(dimensions_error(width, height));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let offset = self.offset(x, y)?;
        let px = &self.data[offset..offset + BYTES_PER_PIXEL];
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Write one pixel; returns `false` when `(x, y)` is outside the buffer
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                self.data[offset..offset + BYTES_PER_PIXEL]
                    .copy_from_slice(&[color.r, color.g, color.b, color.a]);
                true
            }
            None => false,
        }
    }

    /// Fill every pixel with `color`
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Copy of the `width × height` region at `(x, y)`.
    ///
    /// Negative sizes select the region extending left/up from `(x, y)`.
    /// Pixels outside this buffer come back transparent black.
    pub fn region(&self, x: i64, y: i64, width: i64, height: i64) -> Result<ImageData> {
        let area = Rect::new(x, y, width, height).normalized();
        let (out_width, out_height) =
            match (u32::try_from(area.width), u32::try_from(area.height)) {
                (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
                _ => return Err(BridgeError::InvalidDimensions { width, height }),
            };

        let mut out = ImageData::new(out_width, out_height)?;
        if let Some(overlap) = area.intersect(self.bounds()) {
            for row in 0..overlap.height {
                let src_y = overlap.y + row;
                let dst_y = src_y - area.y;
                let src_start = self.row_offset(overlap.x, src_y);
                let dst_start = out.row_offset(overlap.x - area.x, dst_y);
                let len = overlap.width as usize * BYTES_PER_PIXEL;
                out.data[dst_start..dst_start + len]
                    .copy_from_slice(&self.data[src_start..src_start + len]);
            }
        }
        Ok(out)
    }

    /// Write `source` into this buffer with its origin at `(dx, dy)`.
    ///
    /// `dirty` restricts the copy to a rectangle in source coordinates. The
    /// copied area is clipped to both buffers; pixels are replaced, not
    /// blended.
    pub fn put(&mut self, source: &ImageData, dx: i64, dy: i64, dirty: Option<Rect>) {
        let mut area = dirty.map(Rect::normalized).unwrap_or_else(|| source.bounds());
        area = match area.intersect(source.bounds()) {
            Some(area) => area,
            None => return,
        };

        // A saturated origin lies far outside any buffer and clips away.
        let target = Rect::new(
            area.x.saturating_add(dx),
            area.y.saturating_add(dy),
            area.width,
            area.height,
        );
        let Some(clipped) = target.intersect(self.bounds()) else {
            return;
        };

        for row in 0..clipped.height {
            let dst_y = clipped.y + row;
            let src_y = dst_y - dy;
            let src_start = source.row_offset(clipped.x - dx, src_y);
            let dst_start = self.row_offset(clipped.x, dst_y);
            let len = clipped.width as usize * BYTES_PER_PIXEL;
            self.data[dst_start..dst_start + len]
                .copy_from_slice(&source.data[src_start..src_start + len]);
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, i64::from(self.width), i64::from(self.height))
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    // Callers guarantee (x, y) lies inside the buffer.
    fn row_offset(&self, x: i64, y: i64) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn dimensions_error(width: u32, height: u32) -> BridgeError {
    BridgeError::InvalidDimensions {
        width: i64::from(width),
        height: i64::from(height),
    }
}

fn buffer_len(width: u32, height: u32) -> Result<usize> {
    let pixels = u64::from(width) * u64::from(height);
    if pixels == 0 || pixels > MAX_PIXELS {
        return Err(dimensions_error(width, height));
    }
    usize::try_from(pixels)
        .ok()
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| dimensions_error(width, height))
}
