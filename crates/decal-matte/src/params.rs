//! Tunable parameters for one matting call.

use decal_core::Rgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Default similarity when the caller does not specify one. Wide enough to
/// absorb compression artifacts around a rendered key color, narrow enough
/// to leave saturated subjects alone.
pub const DEFAULT_SIMILARITY: f32 = 40.0;

/// The background color to key out.
///
/// Serialized as a `#rrggbb` hex string. Malformed strings fall back to
/// pure green with a warning instead of failing the call: a bad key color
/// is a configuration mistake, not a reason to abort a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColor(pub Rgb);

impl KeyColor {
    /// Parse a hex string such as `#00ff00`, `00ff00` or `#0f0`.
    ///
    /// Unparseable input logs a warning and yields the default green key.
    pub fn parse_lossy(input: &str) -> Self {
        match Rgb::from_hex(input) {
            Some(rgb) => Self(rgb),
            None => {
                warn!(input, "unparseable key color, using default green");
                Self::default()
            }
        }
    }

    /// The underlying RGB value.
    #[inline]
    pub fn rgb(self) -> Rgb {
        self.0
    }
}

impl Default for KeyColor {
    fn default() -> Self {
        Self(Rgb::GREEN)
    }
}

impl Serialize for KeyColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for KeyColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&raw))
    }
}

/// Fixed output dimensions for the optional letterbox pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Parameters for one background-removal call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatteParams {
    /// Color the background was rendered in.
    #[serde(default)]
    pub key_color: KeyColor,
    /// Match aggressiveness from 0 (only near-exact key pixels) to 100
    /// (a wide hue cone). Values outside the range are clamped on use.
    #[serde(default = "default_similarity")]
    pub similarity: f32,
    /// Optional fixed canvas the source is letterboxed onto before
    /// matting. `None` processes the source at its own size.
    #[serde(default)]
    pub canvas: Option<CanvasSize>,
}

fn default_similarity() -> f32 {
    DEFAULT_SIMILARITY
}

impl Default for MatteParams {
    fn default() -> Self {
        Self {
            key_color: KeyColor::default(),
            similarity: DEFAULT_SIMILARITY,
            canvas: None,
        }
    }
}

impl MatteParams {
    /// Preset for footage shot against a green screen.
    pub fn green_screen() -> Self {
        Self::default()
    }

    /// Preset for footage shot against a blue screen.
    pub fn blue_screen() -> Self {
        Self {
            key_color: KeyColor(Rgb::BLUE),
            ..Self::default()
        }
    }

    /// Similarity clamped into its 0–100 domain.
    pub fn clamped_similarity(&self) -> f32 {
        self.similarity.clamp(0.0, 100.0)
    }
}
