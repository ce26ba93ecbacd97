//! Reference palette matching
//!
//! Finds the built-in family whose swatches contain the color closest to the
//! input (CIEDE2000), picks the anchor swatch by HSL lightness, and re-tints
//! the whole family toward the input's hue and saturation.

use image::Rgba;
use palette::color_difference::Ciede2000;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::color::{hsl_of, lab_of, rgba_from_hsl, rgba_to_hex, ColorError};
use crate::palettes::{families, Family};
use crate::scale::{resolve_seed, serialize_fallback, DEFAULT_COLOR};
use crate::shade::Shade;

/// How swatch hues were moved toward the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", content = "degrees", rename_all = "lowercase")]
pub enum HueAdjustment {
    /// Every swatch hue was replaced by this angle
    Absolute(f64),
    /// This many degrees were added to every swatch hue
    Relative(f64),
}

/// One shade of a matched reference family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceShade {
    pub shade: Shade,
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// True for the shade that holds the input color
    pub anchor: bool,
}

/// The re-tinted reference family for one input color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceMatch {
    /// Name of the matched family, e.g. `"blue"`
    pub family: &'static str,
    pub anchor: Shade,
    /// Input as lowercase hex (the fallback color if parsing failed)
    pub input: String,
    /// CIEDE2000 distance to the nearest swatch
    pub delta_e: f64,
    pub hue: HueAdjustment,
    pub saturation_ratio: f64,
    #[serde(serialize_with = "serialize_shades")]
    pub shades: Vec<ReferenceShade>,
    #[serde(serialize_with = "serialize_fallback")]
    pub fallback: Option<ColorError>,
}

impl ReferenceMatch {
    pub fn get(&self, shade: Shade) -> Option<&ReferenceShade> {
        self.shades.iter().find(|s| s.shade == shade)
    }

    pub fn hex(&self, shade: Shade) -> Option<&str> {
        self.get(shade).map(|s| s.hex.as_str())
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

fn serialize_shades<S: Serializer>(
    shades: &[ReferenceShade],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    #[derive(Serialize)]
    struct Entry<'a> {
        hex: &'a str,
        anchor: bool,
    }

    let mut map = serializer.serialize_map(Some(shades.len()))?;
    for s in shades {
        map.serialize_entry(&s.shade, &Entry { hex: &s.hex, anchor: s.anchor })?;
    }
    map.end()
}

/// Match color text against the reference palette, substituting
/// [`DEFAULT_COLOR`] when the text is not a color.
pub fn match_reference(text: &str) -> ReferenceMatch {
    match_reference_with_fallback(text, DEFAULT_COLOR)
}

pub fn match_reference_with_fallback(text: &str, fallback: &str) -> ReferenceMatch {
    let (rgba, error) = resolve_seed(text, fallback);
    let mut result = match_reference_rgba(rgba);
    result.fallback = error;
    result
}

/// Match an already-parsed color.
pub fn match_reference_rgba(input: Rgba<u8>) -> ReferenceMatch {
    let (family, delta_e) = closest_family(input);
    let input_hsl = hsl_of(input);

    // Anchor on HSL lightness; later swatches win ties
    let mut anchor = family.swatches[0];
    let mut anchor_diff = f64::INFINITY;
    let mut anchor_rgba = Rgba([0, 0, 0, 255]);
    for swatch in &family.swatches {
        let rgba = swatch_rgba(swatch.hex);
        let diff = (hsl_of(rgba).l - input_hsl.l).abs();
        if diff <= anchor_diff {
            anchor = *swatch;
            anchor_diff = diff;
            anchor_rgba = rgba;
        }
    }

    let anchor_hsl = hsl_of(anchor_rgba);
    let hue_delta = input_hsl.h - anchor_hsl.h;
    let saturation_ratio =
        if anchor_hsl.s == 0.0 { 1.0 } else { input_hsl.s / anchor_hsl.s };

    // A zero delta sets every hue to the anchor's own hue instead of leaving
    // the swatch hues alone. Kept as-is: matched output depends on it.
    let hue = if hue_delta == 0.0 {
        HueAdjustment::Absolute(anchor_hsl.h)
    } else {
        HueAdjustment::Relative(hue_delta)
    };
    debug!(family = family.name, anchor = %anchor.shade, delta_e, ?hue, saturation_ratio, "matched reference family");

    let shades = family
        .swatches
        .iter()
        .map(|swatch| {
            if swatch.shade == anchor.shade {
                return ReferenceShade { shade: swatch.shade, hex: rgba_to_hex(input), anchor: true };
            }
            let hsl = hsl_of(swatch_rgba(swatch.hex));
            let h = match hue {
                HueAdjustment::Absolute(h) => h,
                HueAdjustment::Relative(delta) => hsl.h + delta,
            };
            let rgba = rgba_from_hsl(h, hsl.s * saturation_ratio, hsl.l);
            ReferenceShade { shade: swatch.shade, hex: rgba_to_hex(rgba), anchor: false }
        })
        .collect();

    ReferenceMatch {
        family: family.name,
        anchor: anchor.shade,
        input: rgba_to_hex(input),
        delta_e,
        hue,
        saturation_ratio,
        shades,
        fallback: None,
    }
}

/// Family holding the swatch nearest to `input`. Later families win ties.
fn closest_family(input: Rgba<u8>) -> (&'static Family, f64) {
    let target = lab_of(input);
    let all = families();
    let mut best = &all[0];
    let mut best_delta = f64::INFINITY;

    for family in all {
        for swatch in &family.swatches {
            let delta = target.difference(lab_of(swatch_rgba(swatch.hex)));
            if delta <= best_delta {
                best = family;
                best_delta = delta;
            }
        }
    }
    (best, best_delta)
}

fn swatch_rgba(hex: &str) -> Rgba<u8> {
    // The table only holds valid lowercase hex
    crate::color::parse_rgba(hex).unwrap_or(Rgba([0, 0, 0, 255]))
}
