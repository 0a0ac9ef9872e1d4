//! Packed RGBA8 pixel grid, the working buffer of one matting call.

use crate::color::Rgb;

/// A width × height RGBA8 image stored as one flat buffer.
///
/// Layout is row-major: pixel `(x, y)` starts at byte `(y * width + x) * 4`,
/// channels in R, G, B, A order. Every matting pass mutates one grid in
/// place; a grid is owned by exactly one call and never shared between
/// concurrent operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Create a transparent black grid.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0u8; len],
        }
    }

    /// Create a grid filled with an opaque color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let mut grid = Self::new(width, height);
        for px in grid.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = 255;
        }
        grid
    }

    /// Wrap an existing RGBA8 buffer.
    ///
    /// Returns `None` when the buffer length does not match
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the grid has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat pixel index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// RGB channels of the pixel at flat index `idx`.
    #[inline]
    pub fn rgb_at(&self, idx: usize) -> Rgb {
        let o = idx * 4;
        Rgb::new(self.data[o], self.data[o + 1], self.data[o + 2])
    }

    /// Overwrite the RGB channels at flat index `idx`, leaving alpha alone.
    #[inline]
    pub fn put_rgb_at(&mut self, idx: usize, rgb: Rgb) {
        let o = idx * 4;
        self.data[o] = rgb.r;
        self.data[o + 1] = rgb.g;
        self.data[o + 2] = rgb.b;
    }

    /// Alpha channel of the pixel at flat index `idx`.
    #[inline]
    pub fn alpha_at(&self, idx: usize) -> u8 {
        self.data[idx * 4 + 3]
    }

    /// Overwrite the alpha channel at flat index `idx`.
    #[inline]
    pub fn set_alpha_at(&mut self, idx: usize, alpha: u8) {
        self.data[idx * 4 + 3] = alpha;
    }

    /// Full RGBA value of the pixel at `(x, y)`.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let o = self.index(x, y) * 4;
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }

    /// Write a full RGBA value at `(x, y)`.
    #[inline]
    pub fn put_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let o = self.index(x, y) * 4;
        self.data[o..o + 4].copy_from_slice(&rgba);
    }

    /// Copy of the alpha plane, one byte per pixel.
    ///
    /// Passes that must read a consistent pre-pass state (alpha feathering)
    /// take this snapshot before writing anything back.
    pub fn alpha_snapshot(&self) -> Vec<u8> {
        self.data.chunks_exact(4).map(|px| px[3]).collect()
    }

    /// Borrow the raw RGBA8 buffer.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the grid, returning the raw RGBA8 buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
