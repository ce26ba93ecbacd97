//! WASM API module for browser/JS interop
//!
//! Every function takes color text and returns a JSON string, the same shape
//! the CLI prints with `--format json`.

use wasm_bindgen::prelude::*;

use crate::contrast;
use crate::palette_set::{GenerateConfig, PaletteSet};
use crate::reference;
use crate::scale;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    // Result types only hold strings, numbers and maps
    serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

/// Generate the 50-950 scale for a color.
///
/// Returns `{"scale": {"50": "#...", ...}, "anchor": "500", "input": "#...", "fallback": null}`.
#[wasm_bindgen]
pub fn generate_scale(color: &str) -> String {
    to_json(&scale::generate_scale(color))
}

/// Generate primary, secondary, complementary and semantic scales.
///
/// # Arguments
/// * `color` - Seed color
/// * `with_reference` - Also match the seed against the reference palette
#[wasm_bindgen]
pub fn generate_palette_set(color: &str, with_reference: bool) -> String {
    let config = GenerateConfig { reference: with_reference, ..GenerateConfig::default() };
    to_json(&PaletteSet::generate(color, &config))
}

/// Match a color against the reference palette families.
#[wasm_bindgen]
pub fn match_reference(color: &str) -> String {
    to_json(&reference::match_reference(color))
}

/// Contrast ratios between every pair of shades of the color's scale.
#[wasm_bindgen]
pub fn contrast_grid(color: &str) -> String {
    let result = scale::generate_scale(color);
    to_json(&contrast::contrast_grid(&result.scale))
}
