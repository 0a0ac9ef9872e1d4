//! Decal Media - the image decode/encode boundary
//!
//! The only fallible edge of the cutout pipeline: turning encoded bytes
//! into an RGBA pixel grid, and a processed grid back into PNG (the one
//! output format that keeps alpha). Everything between those two edges is
//! pure, infallible array math in `decal-matte`.

pub mod decoder;
pub mod encoder;

pub use decoder::{decode_bytes, is_supported_image, open_image};
pub use encoder::{default_output_path, encode_png, save_png};
