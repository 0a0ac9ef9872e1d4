//! Key-color matching: threshold derivation and the per-pixel predicate.

use decal_core::{hue_distance, Hsl, Rgb};

use crate::params::MatteParams;

/// Euclidean RGB distance below which a pixel is accepted outright,
/// without an HSL conversion.
pub(crate) const FAST_PATH_DISTANCE: f32 = 30.0;
/// Euclidean RGB distance a pixel must stay under to seed an
/// enclosed-hole traversal.
pub(crate) const HOLE_SEED_DISTANCE: f32 = 35.0;
/// Lightness window outside which nothing counts as key-colored; shadows
/// and speculars fall outside it.
pub(crate) const LIGHTNESS_MIN: f32 = 0.10;
pub(crate) const LIGHTNESS_MAX: f32 = 0.98;
/// Multiplier applied to the hue tolerance in strict mode.
const STRICT_FACTOR: f32 = 0.7;

/// Matching thresholds, derived once per call from the key color and the
/// similarity setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Accepted hue deviation from the key hue, in degrees. Ranges from
    /// 20° at similarity 0 to 80° at similarity 100.
    pub hue: f32,
    /// Minimum saturation for a pixel to count as key-colored. Floored at
    /// 0.1 so a washed-out key still yields a usable threshold.
    pub saturation_floor: f32,
}

impl Tolerances {
    /// Derive thresholds from the key color's HSL and a similarity in
    /// 0–100 (clamped).
    pub fn derive(key: Hsl, similarity: f32) -> Self {
        let similarity = similarity.clamp(0.0, 100.0);
        Self {
            hue: 20.0 + 0.6 * similarity,
            saturation_floor: (key.s * 0.5).max(0.1),
        }
    }
}

/// The one answer to "does this pixel read as background".
///
/// Built once per matting call and shared by every pass, so the passes can
/// never disagree about what the key color looks like.
#[derive(Debug, Clone, Copy)]
pub struct KeyMatcher {
    key: Rgb,
    key_hsl: Hsl,
    tolerances: Tolerances,
}

impl KeyMatcher {
    pub fn new(params: &MatteParams) -> Self {
        let key = params.key_color.rgb();
        let key_hsl = key.to_hsl();
        let tolerances = Tolerances::derive(key_hsl, params.similarity);
        Self {
            key,
            key_hsl,
            tolerances,
        }
    }

    /// The key color this matcher was built for.
    #[inline]
    pub fn key(&self) -> Rgb {
        self.key
    }

    /// Hue of the key color, in degrees.
    #[inline]
    pub fn key_hue(&self) -> f32 {
        self.key_hsl.h
    }

    /// The thresholds in effect for this call.
    #[inline]
    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Decide whether a pixel reads as the key color.
    ///
    /// `strict` narrows the hue cone to 70% of its normal width; the
    /// enclosed-hole pass uses it for seeding, where a false positive
    /// would erase foreground.
    pub fn is_match(&self, pixel: Rgb, strict: bool) -> bool {
        // Pure, unspoiled key pixels skip the HSL conversion.
        if pixel.distance(self.key) < FAST_PATH_DISTANCE {
            return true;
        }
        let hsl = pixel.to_hsl();
        if hsl.l < LIGHTNESS_MIN || hsl.l > LIGHTNESS_MAX {
            return false;
        }
        if hsl.s < self.tolerances.saturation_floor {
            return false;
        }
        let tolerance = if strict {
            self.tolerances.hue * STRICT_FACTOR
        } else {
            self.tolerances.hue
        };
        hue_distance(hsl.h, self.key_hsl.h) <= tolerance
    }

    /// Decide whether a pixel may open an enclosed-hole traversal.
    ///
    /// Tighter than a plain match on both axes: the RGB distance gate
    /// rejects colors that merely share the key hue, and the strict
    /// re-check rejects RGB-near pixels that fail the lightness or
    /// saturation gates.
    pub fn is_hole_seed(&self, pixel: Rgb) -> bool {
        pixel.distance(self.key) < HOLE_SEED_DISTANCE && self.is_match(pixel, true)
    }
}
