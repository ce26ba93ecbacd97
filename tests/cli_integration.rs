//! CLI integration tests
//!
//! These tests run the huescale binary end to end and check stdout, stderr
//! and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run huescale in an isolated directory so no user config is picked up.
fn huescale(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_huescale"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute huescale")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_scale_json() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &["scale", "#3B82F6", "--format", "json"]);

    assert!(output.status.success(), "scale failed: {}", stderr(&output));
    let value = json(&output);
    assert_eq!(value["anchor"], "500");
    assert_eq!(value["scale"]["500"], "#3b82f6");
    assert_eq!(value["scale"].as_object().map(|m| m.len()), Some(11));
}

#[test]
fn test_scale_multiple_colors_keep_order() {
    let temp = TempDir::new().expect("should create temp dir");
    let output =
        huescale(temp.path(), &["scale", "#ef4444", "#22c55e", "#3B82F6", "--format", "json"]);

    assert!(output.status.success());
    let value = json(&output);
    let inputs: Vec<&str> = value
        .as_array()
        .expect("array for several colors")
        .iter()
        .map(|r| r["input"].as_str().expect("input"))
        .collect();
    assert_eq!(inputs, ["#ef4444", "#22c55e", "#3b82f6"]);
}

#[test]
fn test_scale_text_without_color() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &["scale", "3b82f6", "--no-color"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("#3b82f6 (anchor 500)"));
    assert!(text.contains("<- anchor"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_invalid_color_warns_and_succeeds() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &["scale", "not-a-color", "--format", "json"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Warning:"));
    let value = json(&output);
    assert_eq!(value["input"], "#3b82f6");
    assert!(value["fallback"].is_string());
}

#[test]
fn test_css_output() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &["palette", "#3B82F6", "--format", "css"]);

    assert!(output.status.success());
    let css = stdout(&output);
    assert!(css.starts_with(":root {"));
    assert!(css.contains("--primary-500: #3b82f6;"));
    assert!(css.contains("--complementary-950:"));
    assert!(css.contains("--warning-50:"));
}

#[test]
fn test_secondary_flags() {
    let temp = TempDir::new().expect("should create temp dir");
    let shifted = huescale(temp.path(), &["secondary", "#64748b", "--hue-shift", "-60", "--format", "json"]);
    let identity = huescale(
        temp.path(),
        &["secondary", "#64748b", "--hue-shift", "0", "--chroma-factor", "1", "--format", "json"],
    );
    let primary = huescale(temp.path(), &["scale", "#64748b", "--format", "json"]);

    assert!(shifted.status.success());
    assert_eq!(json(&identity), json(&primary)["scale"]);
    assert_ne!(json(&shifted), json(&primary)["scale"]);
}

#[test]
fn test_negative_chroma_is_invalid_args() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &["complementary", "#3B82F6", "--chroma-factor", "-1"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("chroma_factor"));
}

#[test]
fn test_contrast_levels() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &["contrast", "#3B82F6", "--level"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("AAA"));

    let css = huescale(temp.path(), &["contrast", "#3B82F6", "--format", "css"]);
    assert_eq!(css.status.code(), Some(2));
}

#[test]
fn test_match_json() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &["match", "#ef4445", "--format", "json"]);

    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["family"], "red");
    assert_eq!(value["anchor"], "500");
    assert_eq!(value["shades"]["500"]["hex"], "#ef4445");
}

#[test]
fn test_families() {
    let temp = TempDir::new().expect("should create temp dir");
    let list = huescale(temp.path(), &["families", "--no-color"]);
    assert!(list.status.success());
    assert!(stdout(&list).contains("emerald"));

    let show = huescale(temp.path(), &["families", "show", "blue", "--no-color"]);
    assert!(show.status.success());
    assert!(stdout(&show).contains("#3b82f6"));

    let unknown = huescale(temp.path(), &["families", "show", "emrald"]);
    assert_eq!(unknown.status.code(), Some(1));
    assert!(stderr(&unknown).contains("Did you mean 'emerald'?"));
}

#[test]
fn test_config_file_is_discovered() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(
        temp.path().join("huescale.toml"),
        "[generate]\nfallback = \"#ef4444\"\n\n[output]\nformat = \"json\"\n",
    )
    .expect("should write config");
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).expect("should create dirs");

    let output = huescale(&nested, &["scale", "nope"]);
    assert!(output.status.success());
    assert_eq!(json(&output)["input"], "#ef4444");
}

#[test]
fn test_invalid_config_is_error() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[generate]\nfallback = \"nope\"\n").expect("should write config");

    let output = huescale(temp.path(), &["--config", path.to_str().expect("utf8"), "scale", "red"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("generate.fallback"));
}

#[test]
fn test_output_file() {
    let temp = TempDir::new().expect("should create temp dir");
    let target = temp.path().join("out").join("brand.css");
    let output = huescale(
        temp.path(),
        &["scale", "#22c55e", "--format", "css", "-o", target.to_str().expect("utf8")],
    );

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    let css = fs::read_to_string(&target).expect("output file");
    assert!(css.contains("--primary-500: #22c55e;"));
}

#[test]
fn test_missing_subcommand_is_invalid_args() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = huescale(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
}
