//! Integer pixel geometry for canvas fitting.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Check whether a pixel coordinate lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Compute where a `src_w × src_h` image lands when letterboxed into a
/// `dst_w × dst_h` canvas.
///
/// The source is scaled uniformly so it fits entirely inside the target
/// (no cropping; upscaling is allowed) and centered. Margins left over on
/// one axis are the letterbox.
pub fn fit_rect(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> PixelRect {
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
        return PixelRect::default();
    }
    let scale = (dst_w as f32 / src_w as f32).min(dst_h as f32 / src_h as f32);
    let width = ((src_w as f32 * scale).round() as u32).clamp(1, dst_w);
    let height = ((src_h as f32 * scale).round() as u32).clamp(1, dst_h);
    PixelRect::new((dst_w - width) / 2, (dst_h - height) / 2, width, height)
}
