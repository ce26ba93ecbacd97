//! Hue rotations of an existing scale
//!
//! Secondary and complementary scales keep the source lightness ramp and
//! move the hue, optionally scaling chroma.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::scale::Scale;

/// Parameters for [`secondary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryOptions {
    /// Degrees added to every hue
    pub hue_shift: f64,
    /// Multiplier applied to every chroma
    pub chroma_factor: f64,
}

impl Default for SecondaryOptions {
    fn default() -> Self {
        Self { hue_shift: 30.0, chroma_factor: 0.85 }
    }
}

/// Parameters for [`complementary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplementaryOptions {
    pub chroma_factor: f64,
}

impl Default for ComplementaryOptions {
    fn default() -> Self {
        Self { chroma_factor: 1.0 }
    }
}

/// Hue shift used by [`complementary`].
pub const COMPLEMENTARY_SHIFT: f64 = 180.0;

/// Rotate every entry by `hue_shift` and scale its chroma.
pub fn secondary(scale: &Scale, options: SecondaryOptions) -> Scale {
    rotate(scale, options.hue_shift, options.chroma_factor)
}

/// Rotate every entry by 180 degrees and scale its chroma.
pub fn complementary(scale: &Scale, options: ComplementaryOptions) -> Scale {
    rotate(scale, COMPLEMENTARY_SHIFT, options.chroma_factor)
}

fn rotate(scale: &Scale, hue_shift: f64, chroma_factor: f64) -> Scale {
    let shift = hue_shift.rem_euclid(360.0);
    Scale::from_fn(|shade| {
        let source = scale.color(shade);
        // Color::new wraps the hue back into [0, 360)
        Color::new(source.l, source.c * chroma_factor, source.hue_or_zero() + shift)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::generate_scale;
    use crate::shade::Shade;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_default_options() {
        assert_eq!(SecondaryOptions::default().hue_shift, 30.0);
        assert_eq!(SecondaryOptions::default().chroma_factor, 0.85);
        assert_eq!(ComplementaryOptions::default().chroma_factor, 1.0);
    }

    #[test]
    fn test_complementary_rotates_hue() {
        // Low chroma slate stays in gamut after rotation
        let scale = generate_scale("#64748b").scale;
        let comp = complementary(&scale, ComplementaryOptions::default());
        for shade in Shade::ALL {
            let source = scale.color(shade);
            let rotated = comp.color(shade);
            let expected = (source.h + 180.0) % 360.0;
            assert!(
                hue_distance(rotated.h, expected) < 3.0,
                "shade {}: {} vs {}",
                shade,
                rotated.h,
                expected
            );
            assert!((rotated.l - source.l).abs() < 0.01);
        }
    }

    #[test]
    fn test_secondary_differs_from_complementary() {
        let scale = generate_scale("#3B82F6").scale;
        let sec = secondary(&scale, SecondaryOptions::default());
        let comp = complementary(&scale, ComplementaryOptions::default());
        assert_ne!(sec, comp);
        assert_ne!(sec.hex(Shade::S500), comp.hex(Shade::S500));
    }

    #[test]
    fn test_secondary_keeps_lightness() {
        let scale = generate_scale("#64748b").scale;
        let sec = secondary(&scale, SecondaryOptions::default());
        for shade in Shade::ALL {
            assert!((sec.color(shade).l - scale.color(shade).l).abs() < 0.01);
        }
    }

    #[test]
    fn test_zero_chroma_factor_gives_grays() {
        let scale = generate_scale("#3B82F6").scale;
        let gray = secondary(&scale, SecondaryOptions { hue_shift: 30.0, chroma_factor: 0.0 });
        for entry in gray.iter() {
            assert!(entry.color.achromatic, "{} should be gray", entry.hex);
        }
    }

    #[test]
    fn test_full_turn_is_identity() {
        let scale = generate_scale("#64748b").scale;
        let same = secondary(&scale, SecondaryOptions { hue_shift: 360.0, chroma_factor: 1.0 });
        assert_eq!(same.hexes(), scale.hexes());
        let negative = secondary(&scale, SecondaryOptions { hue_shift: -360.0, chroma_factor: 1.0 });
        assert_eq!(negative.hexes(), scale.hexes());
    }

    #[test]
    fn test_achromatic_scale_stays_gray() {
        let scale = generate_scale("#808080").scale;
        let comp = complementary(&scale, ComplementaryOptions::default());
        assert_eq!(comp.hexes(), scale.hexes());
    }
}
