//! Shade labels, the master curves, and perceptual shade matching
//!
//! The eleven shade labels run from 50 (lightest) to 950 (darkest). Each has
//! a target OKLCH lightness and a maximum chroma; a seed color is assigned
//! to the shade whose target lightness is closest after a hue-dependent
//! correction for how bright that hue looks.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the eleven fixed tonal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

/// Error returned when a label is not one of the eleven shades.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shade '{0}', expected one of 50, 100, 200, ..., 900, 950")]
pub struct UnknownShade(pub String);

impl Shade {
    /// All shades, lightest first.
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Position in [`Shade::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Numeric label, e.g. `500`.
    pub fn value(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Shade> {
        Shade::ALL.into_iter().find(|s| s.value() == value)
    }

    /// Target OKLCH lightness for this shade.
    pub fn target_lightness(self) -> f64 {
        TARGET_LIGHTNESS[self.index()]
    }

    /// Maximum chroma a fully vivid color reaches at this shade.
    pub fn max_chroma(self) -> f64 {
        MAX_CHROMA[self.index()]
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Shade {
    type Err = UnknownShade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Shade::from_value)
            .ok_or_else(|| UnknownShade(s.to_string()))
    }
}

impl Serialize for Shade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Shade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Master lightness curve, lightest to darkest (zinc-like ramp).
pub const TARGET_LIGHTNESS: [f64; 11] =
    [0.98, 0.95, 0.90, 0.85, 0.77, 0.69, 0.60, 0.52, 0.43, 0.34, 0.25];

/// Master chroma curve; peaks in the 400-600 range and fades at both ends.
pub const MAX_CHROMA: [f64; 11] =
    [0.03, 0.06, 0.11, 0.16, 0.19, 0.21, 0.20, 0.19, 0.17, 0.15, 0.13];

/// Lightness correction applied before matching, by hue band.
///
/// Bands are discrete and checked in order; the first one that contains the
/// hue wins. Yellows read lighter than their OKLCH lightness, blues darker.
pub fn hue_correction(hue: f64) -> f64 {
    if hue >= 40.0 && hue <= 90.0 {
        -0.10
    } else if hue >= 200.0 && hue <= 260.0 {
        0.05
    } else if hue >= 100.0 && hue <= 140.0 {
        -0.03
    } else if hue >= 340.0 || hue <= 20.0 {
        0.02
    } else {
        0.0
    }
}

/// Pick the shade whose target lightness is closest to the corrected
/// lightness. Ties go to the lighter shade.
pub fn find_shade(lightness: f64, hue: f64) -> Shade {
    let perceived = lightness + hue_correction(hue);

    let mut best = Shade::ALL[0];
    let mut best_diff = (best.target_lightness() - perceived).abs();
    for shade in Shade::ALL.into_iter().skip(1) {
        let diff = (shade.target_lightness() - perceived).abs();
        if diff < best_diff {
            best = shade;
            best_diff = diff;
        }
    }
    best
}
