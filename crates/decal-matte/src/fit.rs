//! Letterbox-and-fit onto a fixed, key-colored canvas.

use decal_core::{fit_rect, PixelGrid, Rgb};
use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::params::CanvasSize;

/// Fit `source` onto a `canvas`-sized grid pre-filled with the key color.
///
/// The source is scaled uniformly (bilinear) until it fits entirely inside
/// the target, then composited centered. Letterbox margins take the key
/// color on purpose: the matting passes remove them along with the rest of
/// the background, so a fitted output never shows a margin fringe.
pub fn fit_to_canvas(source: PixelGrid, canvas: CanvasSize, key: Rgb) -> PixelGrid {
    let mut target = PixelGrid::filled(canvas.width, canvas.height, key);
    let rect = fit_rect(source.width(), source.height(), canvas.width, canvas.height);
    if rect.width == 0 || rect.height == 0 {
        return target;
    }

    let src_w = source.width();
    let src_h = source.height();
    let Some(image) = RgbaImage::from_raw(src_w, src_h, source.into_raw()) else {
        // Grid buffers are always width * height * 4.
        return target;
    };
    let scaled = if rect.width == src_w && rect.height == src_h {
        image
    } else {
        imageops::resize(&image, rect.width, rect.height, FilterType::Triangle)
    };

    for y in 0..rect.height {
        for x in 0..rect.width {
            let [r, g, b, a] = scaled.get_pixel(x, y).0;
            let idx = target.index(rect.x + x, rect.y + y);
            let dst = target.rgb_at(idx);
            let alpha = a as f32 / 255.0;
            let blend =
                |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
            target.put_rgb_at(idx, Rgb::new(blend(r, dst.r), blend(g, dst.g), blend(b, dst.b)));
        }
    }
    target
}
