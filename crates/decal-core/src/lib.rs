//! Decal Core - Foundation types for the sticker cutout pipeline
//!
//! This crate provides the fundamental types used throughout Decal:
//! - RGBA pixel grids (the single-owner working buffer of one matting call)
//! - Color math (RGB/HSL conversion, hex parsing, distance measures)
//! - Letterbox geometry for canvas fitting
//! - Error taxonomy

pub mod color;
pub mod error;
pub mod geometry;
pub mod pixel;

pub use color::{hue_distance, Hsl, Rgb};
pub use error::{DecalError, Result};
pub use geometry::{fit_rect, PixelRect};
pub use pixel::PixelGrid;
