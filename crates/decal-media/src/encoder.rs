//! Encoding pixel grids back to PNG.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use decal_core::{DecalError, PixelGrid, Result};
use image::{ImageFormat, RgbaImage};
use tracing::debug;

/// Encode a pixel grid as PNG bytes.
///
/// PNG is the one output format: lossless, and it keeps the alpha channel
/// the matte produced.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let image = RgbaImage::from_raw(grid.width(), grid.height(), grid.as_raw().to_vec())
        .ok_or_else(|| DecalError::Encode("pixel buffer has the wrong length".into()))?;
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| DecalError::Encode(e.to_string()))?;
    Ok(bytes.into_inner())
}

/// Encode a grid and write it to `path`.
pub fn save_png<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(grid)?;
    fs::write(path, &bytes)?;
    debug!(path = %path.display(), len = bytes.len(), "wrote cutout");
    Ok(())
}

/// Default output path for a cutout: `photo.jpg` becomes
/// `photo.cutout.png`, next to the input.
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cutout");
    input.with_file_name(format!("{stem}.cutout.png"))
}
