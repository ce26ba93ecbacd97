//! WASM tests using wasm_bindgen_test
//!
//! Run with: wasm-pack test --headless --chrome --features wasm

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use huescale::wasm::{contrast_grid, generate_palette_set, generate_scale, match_reference};

fn parse(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("wasm output should be valid JSON")
}

#[wasm_bindgen_test]
fn test_generate_scale() {
    let value = parse(&generate_scale("#3B82F6"));
    assert_eq!(value["anchor"], "500");
    assert_eq!(value["scale"]["500"], "#3b82f6");
    assert!(value["fallback"].is_null());
}

#[wasm_bindgen_test]
fn test_generate_scale_fallback() {
    let value = parse(&generate_scale("not a color"));
    assert!(value["fallback"].is_string());
    assert_eq!(value["input"], "#3b82f6");
}

#[wasm_bindgen_test]
fn test_generate_palette_set() {
    let value = parse(&generate_palette_set("#ef4444", true));
    assert_eq!(value["primary"].as_object().map(|m| m.len()), Some(11));
    assert_eq!(value["reference"]["family"], "red");

    let without = parse(&generate_palette_set("#ef4444", false));
    assert!(without.get("reference").is_none());
}

#[wasm_bindgen_test]
fn test_match_reference() {
    let value = parse(&match_reference("#3B82F6"));
    assert_eq!(value["family"], "blue");
    assert_eq!(value["shades"]["500"]["anchor"], true);
}

#[wasm_bindgen_test]
fn test_contrast_grid() {
    let value = parse(&contrast_grid("#3B82F6"));
    assert_eq!(value["50"]["50"], 1.0);
    assert!(value["50"]["950"].as_f64().expect("ratio") > 7.0);
}
