//! Key-color spill suppression along matte edges.

use decal_core::{hue_distance, PixelGrid, Rgb};

use crate::fill::neighbors4;
use crate::matcher::KeyMatcher;

/// Hue band around the key hue inside which edge pixels are despilled.
const SPILL_HUE_BAND: f32 = 30.0;
/// How far each channel is pulled toward the pixel's own gray average.
const SPILL_STRENGTH: f32 = 0.5;

/// Desaturate opaque pixels that border transparency and lean toward the
/// key hue.
///
/// These are the pixels that picked up reflected key light: foreground
/// edges with a colored cast the reachability passes rightly left opaque.
/// Pulling them halfway toward their own gray average removes the cast
/// without touching anything that never saw the key color. Alpha is left
/// alone, so the pass is order-independent and needs no snapshot.
/// Returns the number of pixels adjusted.
pub fn suppress_spill(grid: &mut PixelGrid, matcher: &KeyMatcher) -> usize {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut adjusted = 0;

    for idx in 0..width * height {
        if grid.alpha_at(idx) == 0 {
            continue;
        }
        let on_edge = neighbors4(idx, width, height)
            .into_iter()
            .flatten()
            .any(|neighbor| grid.alpha_at(neighbor) == 0);
        if !on_edge {
            continue;
        }

        let rgb = grid.rgb_at(idx);
        let hsl = rgb.to_hsl();
        if hsl.s == 0.0 || hue_distance(hsl.h, matcher.key_hue()) > SPILL_HUE_BAND {
            continue;
        }

        let gray = rgb.gray_average();
        let mix = |channel: u8| {
            (channel as f32 + (gray - channel as f32) * SPILL_STRENGTH).round() as u8
        };
        grid.put_rgb_at(idx, Rgb::new(mix(rgb.r), mix(rgb.g), mix(rgb.b)));
        adjusted += 1;
    }
    adjusted
}
