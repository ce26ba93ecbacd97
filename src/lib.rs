//! Huescale - perceptual color scale generation
//!
//! This library provides functionality to:
//! - Convert colors to and from OKLCH and match them to a 50-950 shade
//! - Generate tonal scales, hue-rotated and semantic variants
//! - Compute WCAG contrast grids between shades
//! - Match colors against a reference palette of named families

pub mod cli;
pub mod color;
pub mod config;
pub mod contrast;
pub mod logging;
pub mod output;
pub mod palette_set;
pub mod palettes;
pub mod reference;
pub mod scale;
pub mod semantic;
pub mod shade;
pub mod terminal;
pub mod transforms;

#[cfg(feature = "wasm")]
pub mod wasm;
