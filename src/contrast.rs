//! WCAG contrast math
//!
//! Relative luminance and contrast ratio follow the WCAG 2.x definitions
//! (including the 0.03928 linearization threshold). [`contrast_grid`] gives
//! the ratio between every pair of shades in a scale.

use image::Rgba;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::color::{parse_rgba, ColorError};
use crate::scale::Scale;
use crate::shade::Shade;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Relative luminance of an 8-bit sRGB color, in `[0, 1]`.
pub fn luminance(rgba: Rgba<u8>) -> f64 {
    fn linear(v: f64) -> f64 {
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }

    let r = linear(rgba[0] as f64 / 255.0);
    let g = linear(rgba[1] as f64 / 255.0);
    let b = linear(rgba[2] as f64 / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Relative luminance of color text.
pub fn luminance_hex(text: &str) -> Result<f64, ColorError> {
    parse_rgba(text).map(luminance)
}

/// Contrast ratio between two colors, in `[1, 21]`. Order does not matter.
pub fn contrast_ratio(a: Rgba<u8>, b: Rgba<u8>) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Contrast ratio between two color strings.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(parse_rgba(a)?, parse_rgba(b)?))
}

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WcagLevel {
    /// Below 3:1
    Fail,
    /// At least 3:1, enough for large text only
    AaLarge,
    /// At least 4.5:1
    Aa,
    /// At least 7:1
    Aaa,
}

impl WcagLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            WcagLevel::Aaa
        } else if ratio >= 4.5 {
            WcagLevel::Aa
        } else if ratio >= 3.0 {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }

    /// Short label for tables.
    pub fn label(self) -> &'static str {
        match self {
            WcagLevel::Fail => "-",
            WcagLevel::AaLarge => "AA18",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Black or white, whichever contrasts more with `background`.
pub fn readable_text_color(background: Rgba<u8>) -> Rgba<u8> {
    if contrast_ratio(background, BLACK) >= contrast_ratio(background, WHITE) {
        BLACK
    } else {
        WHITE
    }
}

/// 11x11 contrast ratios between the shades of one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastGrid {
    ratios: [[f64; 11]; 11],
}

impl ContrastGrid {
    pub fn get(&self, a: Shade, b: Shade) -> f64 {
        self.ratios[a.index()][b.index()]
    }

    /// Rows in shade order; each row is indexed by shade position.
    pub fn rows(&self) -> impl Iterator<Item = (Shade, &[f64; 11])> {
        Shade::ALL.into_iter().zip(self.ratios.iter())
    }

    pub fn level(&self, a: Shade, b: Shade) -> WcagLevel {
        WcagLevel::from_ratio(self.get(a, b))
    }
}

impl Serialize for ContrastGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Row<'a>(&'a [f64; 11]);

        impl Serialize for Row<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(11))?;
                for (shade, ratio) in Shade::ALL.iter().zip(self.0.iter()) {
                    map.serialize_entry(shade, ratio)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(11))?;
        for (shade, row) in self.rows() {
            map.serialize_entry(&shade, &Row(row))?;
        }
        map.end()
    }
}

/// Contrast between every pair of shades. The diagonal is exactly 1 and the
/// other cells are rounded to two decimals.
pub fn contrast_grid(scale: &Scale) -> ContrastGrid {
    let mut ratios = [[1.0; 11]; 11];
    let colors: Vec<Rgba<u8>> = scale.iter().map(|e| e.color.to_rgba()).collect();

    for a in 0..11 {
        for b in 0..11 {
            if a != b {
                ratios[a][b] = round2(contrast_ratio(colors[a], colors[b]));
            }
        }
    }

    ContrastGrid { ratios }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
