//! Decal Matte - chroma-key background removal
//!
//! Given a decoded RGBA image whose background was rendered in a known,
//! near-uniform key color, produce a cutout: background transparent,
//! enclosed same-color holes cleared, key-color spill suppressed along
//! the subject's edges, and the hard matte boundary feathered into a
//! short alpha ramp. Four ordered passes over one owned pixel buffer:
//!
//! 1. optional letterbox onto a fixed, key-colored canvas
//! 2. border-seeded flood fill (only border-reachable key color is
//!    background)
//! 3. enclosed-hole removal
//! 4. spill suppression and alpha feathering
//!
//! The passes share a single match predicate ([`matcher::KeyMatcher`]),
//! so they can never disagree about what the background looks like.

pub mod feather;
pub mod fill;
pub mod fit;
pub mod matcher;
pub mod params;
pub mod processor;
pub mod spill;

pub use feather::feather_alpha;
pub use fill::{border_flood_fill, clear_enclosed_holes, PixelClass};
pub use fit::fit_to_canvas;
pub use matcher::{KeyMatcher, Tolerances};
pub use params::{CanvasSize, KeyColor, MatteParams, DEFAULT_SIMILARITY};
pub use processor::{cut_out, CutoutResult, MatteProcessor, MatteStats};
pub use spill::suppress_spill;
