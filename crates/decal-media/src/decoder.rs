//! Decoding encoded image bytes into pixel grids.

use std::fs;
use std::path::Path;

use decal_core::{DecalError, PixelGrid, Result};
use tracing::debug;

/// Extensions the batch front end will pick up.
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// Whether a path looks like an image the decoder can handle.
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Decode encoded image bytes into an RGBA pixel grid.
///
/// The format is sniffed from the bytes themselves, not from a file name.
/// Corrupt or unsupported input fails the whole call; there is no partial
/// decode.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelGrid> {
    let image = image::load_from_memory(bytes).map_err(|e| DecalError::Decode(e.to_string()))?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(width, height, "decoded image");
    PixelGrid::from_raw(width, height, rgba.into_raw())
        .ok_or_else(|| DecalError::Decode("decoded buffer has the wrong length".into()))
}

/// Read and decode an image file.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "read image file");
    decode_bytes(&bytes)
}
