//! Tonal scale generation
//!
//! A [`Scale`] is the full 50-950 ramp derived from one seed color. The seed
//! is placed at its perceptual anchor shade and every other shade keeps the
//! same lightness offset and relative chroma against the master curves.

use image::Rgba;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::color::{parse_color, parse_rgba, rgba_to_hex, Color, ColorError};
use crate::shade::{find_shade, Shade, UnknownShade};

/// Substitute seed used when the input cannot be parsed.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Error decoding a scale from a shade -> hex map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("missing shade {0}")]
    MissingShade(Shade),
    #[error(transparent)]
    UnknownShade(#[from] UnknownShade),
    #[error("shade {shade}: {source}")]
    InvalidColor {
        shade: Shade,
        #[source]
        source: ColorError,
    },
}

/// One step of a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEntry {
    pub shade: Shade,
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// OKLCH of `hex` (after 8-bit rounding)
    pub color: Color,
}

impl ScaleEntry {
    fn new(shade: Shade, color: Color) -> Self {
        Self { shade, hex: color.to_hex(), color: color.quantize() }
    }
}

/// An 11-step ramp, always holding every shade in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    entries: [ScaleEntry; 11],
}

impl Scale {
    /// Build a scale by computing one color per shade.
    pub fn from_fn(mut f: impl FnMut(Shade) -> Color) -> Self {
        Self { entries: Shade::ALL.map(|shade| ScaleEntry::new(shade, f(shade))) }
    }

    /// Build a scale from hex strings keyed by shade label.
    pub fn from_hex_map<K: AsRef<str>, V: AsRef<str>>(
        map: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, ScaleError> {
        let mut colors: [Option<Color>; 11] = [None; 11];
        for (key, value) in map {
            let shade: Shade = key.as_ref().parse()?;
            let color = parse_color(value.as_ref())
                .map_err(|source| ScaleError::InvalidColor { shade, source })?;
            colors[shade.index()] = Some(color);
        }

        if let Some(missing) = Shade::ALL.into_iter().find(|s| colors[s.index()].is_none()) {
            return Err(ScaleError::MissingShade(missing));
        }
        Ok(Self::from_fn(|shade| colors[shade.index()].unwrap_or_else(|| Color::gray(0.0))))
    }

    pub fn get(&self, shade: Shade) -> &ScaleEntry {
        &self.entries[shade.index()]
    }

    pub fn hex(&self, shade: Shade) -> &str {
        &self.get(shade).hex
    }

    pub fn color(&self, shade: Shade) -> Color {
        self.get(shade).color
    }

    /// Entries lightest first.
    pub fn iter(&self) -> impl Iterator<Item = &ScaleEntry> {
        self.entries.iter()
    }

    /// Hex values lightest first.
    pub fn hexes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.hex.as_str()).collect()
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.shade, &entry.hex)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = Scale;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from shade label (50..950) to hex color")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Scale, A::Error> {
                let mut raw: HashMap<String, String> = HashMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    raw.insert(key, value);
                }
                Scale::from_hex_map(raw).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}

/// Result of generating a scale from color text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleResult {
    pub scale: Scale,
    /// Shade the seed color landed on
    pub anchor: Shade,
    /// Seed as lowercase hex (the fallback color if parsing failed)
    pub input: String,
    /// Parse error that forced the fallback, if any
    #[serde(serialize_with = "serialize_fallback")]
    pub fallback: Option<ColorError>,
}

impl ScaleResult {
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

pub(crate) fn serialize_fallback<S: Serializer>(
    fallback: &Option<ColorError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match fallback {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Generate a scale from color text, substituting [`DEFAULT_COLOR`] when the
/// text is not a color.
///
/// # Examples
///
/// ```
/// use huescale::scale::generate_scale;
/// use huescale::shade::Shade;
///
/// let result = generate_scale("#3B82F6");
/// assert_eq!(result.anchor, Shade::S500);
/// assert_eq!(result.scale.hex(Shade::S500), "#3b82f6");
/// assert!(!result.used_fallback());
/// ```
pub fn generate_scale(text: &str) -> ScaleResult {
    generate_scale_with_fallback(text, DEFAULT_COLOR)
}

/// Like [`generate_scale`] with a caller-chosen substitute color. If the
/// substitute itself is invalid, [`DEFAULT_COLOR`] is used.
pub fn generate_scale_with_fallback(text: &str, fallback: &str) -> ScaleResult {
    let (rgba, error) = resolve_seed(text, fallback);
    let (scale, anchor) = generate_scale_from_color(Color::from_rgba(rgba));
    ScaleResult { scale, anchor, input: rgba_to_hex(rgba), fallback: error }
}

/// Parse `text`, or fall back to `fallback` (then [`DEFAULT_COLOR`]) with
/// the original error returned alongside.
pub(crate) fn resolve_seed(text: &str, fallback: &str) -> (Rgba<u8>, Option<ColorError>) {
    match parse_rgba(text) {
        Ok(rgba) => (rgba, None),
        Err(e) => {
            warn!(input = text, error = %e, fallback, "invalid color, using fallback");
            let seed = parse_rgba(fallback)
                .or_else(|_| parse_rgba(DEFAULT_COLOR))
                .unwrap_or(Rgba([0x3b, 0x82, 0xf6, 255]));
            (seed, Some(e))
        }
    }
}

/// Generate the scale for an already-parsed color and report its anchor.
pub fn generate_scale_from_color(seed: Color) -> (Scale, Shade) {
    let hue = seed.hue_or_zero();
    let anchor = find_shade(seed.l, hue);

    let lightness_delta = anchor.target_lightness() - seed.l;
    let max_chroma = anchor.max_chroma();
    let chroma_factor = if max_chroma == 0.0 { 0.0 } else { seed.c / max_chroma };
    debug!(%anchor, lightness_delta, chroma_factor, "anchored seed color");

    let scale = Scale::from_fn(|shade| {
        let l = (shade.target_lightness() - lightness_delta).clamp(0.0, 1.0);
        let c = (shade.max_chroma() * chroma_factor).max(0.0);
        // Grays stay gray: chroma_factor is 0 for them, hue 0 is a placeholder
        Color::new(l, c, hue)
    });

    (scale, anchor)
}
