//! Configuration schema types for `huescale.toml`
//!
//! Defines the structure and validation rules for the config file.

use serde::{Deserialize, Serialize};

use crate::color::parse_rgba;
use crate::output::OutputFormat;
use crate::palette_set::GenerateConfig;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Output section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format for commands that print scales
    #[serde(default)]
    pub format: OutputFormat,
    /// Terminal color swatches
    #[serde(default)]
    pub color: ColorMode,
}

/// Complete `huescale.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HuescaleConfig {
    /// Scale generation settings
    #[serde(default)]
    pub generate: GenerateConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation error for config
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "generate.secondary.chroma_factor")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "huescale.toml: '{}' {}", self.field, self.message)
    }
}

impl HuescaleConfig {
    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let generate = &self.generate;

        if let Err(e) = parse_rgba(&generate.fallback) {
            errors.push(ConfigValidationError {
                field: "generate.fallback".to_string(),
                message: format!("must be a color ({})", e),
            });
        }

        if !generate.secondary.hue_shift.is_finite() {
            errors.push(ConfigValidationError {
                field: "generate.secondary.hue_shift".to_string(),
                message: "must be a finite number of degrees".to_string(),
            });
        }

        for (field, factor) in [
            ("generate.secondary.chroma_factor", generate.secondary.chroma_factor),
            ("generate.complementary.chroma_factor", generate.complementary.chroma_factor),
        ] {
            if !factor.is_finite() || factor < 0.0 {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }

        errors
    }
}
