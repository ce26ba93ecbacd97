//! One-pass generation of every scale for a seed color

use serde::{Deserialize, Serialize};

use crate::color::{rgba_to_hex, Color, ColorError};
use crate::contrast::{contrast_grid, ContrastGrid};
use crate::reference::{match_reference_rgba, ReferenceMatch};
use crate::scale::{
    generate_scale_from_color, resolve_seed, serialize_fallback, Scale, DEFAULT_COLOR,
};
use crate::semantic::{generate_semantic, SemanticPalette};
use crate::shade::Shade;
use crate::transforms::{complementary, secondary, ComplementaryOptions, SecondaryOptions};

/// Settings for [`PaletteSet::generate`]. Also the `[generate]` table of
/// the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Substitute seed for unparseable input
    pub fallback: String,
    pub secondary: SecondaryOptions,
    pub complementary: ComplementaryOptions,
    /// Also match the seed against the reference palette
    pub reference: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_COLOR.to_string(),
            secondary: SecondaryOptions::default(),
            complementary: ComplementaryOptions::default(),
            reference: false,
        }
    }
}

/// All scales derived from one seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteSet {
    /// Seed as lowercase hex
    pub input: String,
    pub anchor: Shade,
    pub primary: Scale,
    pub secondary: Scale,
    pub complementary: Scale,
    pub semantic: SemanticPalette,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceMatch>,
    #[serde(serialize_with = "serialize_fallback")]
    pub fallback: Option<ColorError>,
}

impl PaletteSet {
    /// Parse `text` once and build every scale from the same seed.
    pub fn generate(text: &str, config: &GenerateConfig) -> PaletteSet {
        let (rgba, fallback) = resolve_seed(text, &config.fallback);
        let (primary, anchor) = generate_scale_from_color(Color::from_rgba(rgba));

        PaletteSet {
            input: rgba_to_hex(rgba),
            anchor,
            secondary: secondary(&primary, config.secondary),
            complementary: complementary(&primary, config.complementary),
            semantic: generate_semantic(&primary),
            reference: config.reference.then(|| match_reference_rgba(rgba)),
            primary,
            fallback,
        }
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Contrast grid of the primary scale.
    pub fn contrast(&self) -> ContrastGrid {
        contrast_grid(&self.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::generate_scale;

    #[test]
    fn test_primary_matches_generate_scale() {
        let set = PaletteSet::generate("#3B82F6", &GenerateConfig::default());
        let direct = generate_scale("#3B82F6");
        assert_eq!(set.primary, direct.scale);
        assert_eq!(set.anchor, direct.anchor);
        assert_eq!(set.input, "#3b82f6");
        assert!(set.reference.is_none());
        assert!(!set.used_fallback());
    }

    #[test]
    fn test_config_options_flow_through() {
        let config = GenerateConfig {
            secondary: SecondaryOptions { hue_shift: 0.0, chroma_factor: 1.0 },
            reference: true,
            ..GenerateConfig::default()
        };
        let set = PaletteSet::generate("#64748b", &config);
        assert_eq!(set.secondary.hexes(), set.primary.hexes());
        assert_eq!(set.reference.as_ref().map(|r| r.family), Some("slate"));
    }

    #[test]
    fn test_shared_fallback() {
        let config = GenerateConfig { fallback: "#ef4444".to_string(), ..GenerateConfig::default() };
        let set = PaletteSet::generate("nope", &config);
        assert!(set.used_fallback());
        assert_eq!(set.input, "#ef4444");
        assert_eq!(set.primary, generate_scale("#ef4444").scale);
    }

    #[test]
    fn test_contrast_uses_primary() {
        let set = PaletteSet::generate("#3B82F6", &GenerateConfig::default());
        assert_eq!(set.contrast(), contrast_grid(&set.primary));
    }

    #[test]
    fn test_json_sections() {
        let set = PaletteSet::generate("#3B82F6", &GenerateConfig::default());
        let value = serde_json::to_value(&set).expect("serialize");
        for key in ["primary", "secondary", "complementary", "semantic", "anchor"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert!(value.get("reference").is_none());
        assert_eq!(value["semantic"]["danger"].as_object().map(|m| m.len()), Some(11));
    }
}
