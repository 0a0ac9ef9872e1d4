//! The matting pipeline: canvas fit, reachability, spill, feathering.

use decal_core::PixelGrid;
use tracing::debug;

use crate::feather::feather_alpha;
use crate::fill::{border_flood_fill, clear_enclosed_holes, PixelClass};
use crate::fit::fit_to_canvas;
use crate::matcher::KeyMatcher;
use crate::params::MatteParams;
use crate::spill::suppress_spill;

/// Counters describing what one matting call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatteStats {
    /// Pixels cleared by the border-reachability pass.
    pub background_pixels: usize,
    /// Pixels cleared by the enclosed-hole pass.
    pub hole_pixels: usize,
    /// Edge pixels desaturated by spill suppression.
    pub spill_pixels: usize,
    /// Edge pixels whose alpha was feathered.
    pub feathered_pixels: usize,
}

impl MatteStats {
    /// Total pixels made fully transparent.
    pub fn cleared(&self) -> usize {
        self.background_pixels + self.hole_pixels
    }
}

/// Output of one background-removal call.
#[derive(Debug, Clone)]
pub struct CutoutResult {
    /// The processed image; alpha reflects the removed background.
    pub pixels: PixelGrid,
    /// What each pass did, for logging and tests.
    pub stats: MatteStats,
}

/// Runs the matting passes, in order, over one owned pixel grid.
///
/// A processor is cheap to build and holds only the parameters and the
/// thresholds derived from them; pixel buffers and the classification
/// mask live for exactly one [`process`](Self::process) call, so a
/// processor can be shared across threads. Processing is infallible by
/// construction: an image with no key-colored pixels comes back
/// unchanged.
#[derive(Debug, Clone)]
pub struct MatteProcessor {
    params: MatteParams,
    matcher: KeyMatcher,
}

impl MatteProcessor {
    /// Build a processor for one parameter set.
    pub fn new(params: &MatteParams) -> Self {
        Self {
            matcher: KeyMatcher::new(params),
            params: params.clone(),
        }
    }

    /// The parameters this processor was built with.
    pub fn params(&self) -> &MatteParams {
        &self.params
    }

    /// Remove the key-colored background from `source`.
    pub fn process(&self, source: PixelGrid) -> CutoutResult {
        let mut pixels = match self.params.canvas {
            Some(canvas) => fit_to_canvas(source, canvas, self.matcher.key()),
            None => source,
        };

        let mut mask = vec![PixelClass::Unknown; pixels.len()];
        let background_pixels = border_flood_fill(&mut pixels, &mut mask, &self.matcher);
        let hole_pixels = clear_enclosed_holes(&mut pixels, &mut mask, &self.matcher);
        let spill_pixels = suppress_spill(&mut pixels, &self.matcher);
        let feathered_pixels = feather_alpha(&mut pixels);

        let stats = MatteStats {
            background_pixels,
            hole_pixels,
            spill_pixels,
            feathered_pixels,
        };
        debug!(
            width = pixels.width(),
            height = pixels.height(),
            cleared = stats.cleared(),
            holes = stats.hole_pixels,
            spill = stats.spill_pixels,
            feathered = stats.feathered_pixels,
            "matte pass complete"
        );

        CutoutResult { pixels, stats }
    }
}

/// One-shot convenience: build a processor and cut out a single grid.
pub fn cut_out(source: PixelGrid, params: &MatteParams) -> CutoutResult {
    MatteProcessor::new(params).process(source)
}
