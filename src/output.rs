//! Rendering results as text, JSON or CSS, and writing them out

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

use crate::contrast::ContrastGrid;
use crate::palette_set::PaletteSet;
use crate::reference::ReferenceMatch;
use crate::scale::Scale;
use crate::shade::Shade;
use crate::terminal::swatch;

/// Output format for commands that print colors
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// CSS custom properties in a `:root` block
    Css,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Css => "css",
        })
    }
}

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// JSON encoding error
    Json(serde_json::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Json(e)
    }
}

/// Write rendered output to a file, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, contents)?;
    Ok(())
}

/// Pretty JSON with a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// `--{prefix}-{shade}: {hex};` lines, indented for a `:root` block.
pub fn css_variables<'a>(prefix: &str, entries: impl IntoIterator<Item = (Shade, &'a str)>) -> String {
    entries
        .into_iter()
        .map(|(shade, hex)| format!("  --{}-{}: {};\n", prefix, shade, hex))
        .collect()
}

/// Wrap named scales in a single `:root { ... }` block.
pub fn css_root<'a>(sections: impl IntoIterator<Item = (&'a str, &'a Scale)>) -> String {
    let body: String = sections
        .into_iter()
        .map(|(prefix, scale)| css_variables(prefix, scale_entries(scale)))
        .collect();
    css_block(&body)
}

/// Wrap CSS declarations in a `:root` block.
pub fn css_block(body: &str) -> String {
    format!(":root {{\n{}}}\n", body)
}

fn scale_entries(scale: &Scale) -> impl Iterator<Item = (Shade, &str)> {
    scale.iter().map(|e| (e.shade, e.hex.as_str()))
}

fn hex_cell(rgba: Rgba<u8>, hex: &str, color: bool) -> String {
    if color {
        swatch(rgba, hex)
    } else {
        hex.to_string()
    }
}

/// A titled shade table; the anchor row is marked.
pub fn scale_text(title: &str, scale: &Scale, anchor: Option<Shade>, color: bool) -> String {
    let mut out = format!("{}\n", title);
    for entry in scale.iter() {
        let marker = if Some(entry.shade) == anchor { "  <- anchor" } else { "" };
        out.push_str(&format!(
            "  {:>3}  {}{}\n",
            entry.shade,
            hex_cell(entry.color.to_rgba(), &entry.hex, color),
            marker
        ));
    }
    out
}

/// Contrast grid as a table of ratios, or of WCAG labels when `levels`.
pub fn contrast_text(grid: &ContrastGrid, levels: bool) -> String {
    let mut out = String::from("     ");
    for shade in Shade::ALL {
        out.push_str(&format!("{:>6}", shade));
    }
    out.push('\n');

    for (row, ratios) in grid.rows() {
        out.push_str(&format!("{:>5}", row));
        for (col, ratio) in Shade::ALL.iter().zip(ratios.iter()) {
            if levels {
                out.push_str(&format!("{:>6}", grid.level(row, *col).label()));
            } else {
                out.push_str(&format!("{:>6.2}", ratio));
            }
        }
        out.push('\n');
    }
    out
}

/// Matched reference family with the re-tinted shades.
pub fn reference_text(matched: &ReferenceMatch, color: bool) -> String {
    let mut out = format!(
        "Reference: {} (anchor {}, deltaE {:.2})\n",
        matched.family, matched.anchor, matched.delta_e
    );
    for shade in &matched.shades {
        let rgba = crate::color::parse_rgba(&shade.hex).unwrap_or(Rgba([0, 0, 0, 255]));
        let marker = if shade.anchor { "  <- anchor" } else { "" };
        out.push_str(&format!("  {:>3}  {}{}\n", shade.shade, hex_cell(rgba, &shade.hex, color), marker));
    }
    out
}

/// Named scales of a palette set, in the order they are printed.
pub fn palette_set_sections(set: &PaletteSet) -> Vec<(&'static str, &Scale)> {
    let mut sections = vec![
        ("primary", &set.primary),
        ("secondary", &set.secondary),
        ("complementary", &set.complementary),
    ];
    sections.extend(set.semantic.iter().map(|(category, scale)| (category.name(), scale)));
    sections
}

pub fn palette_set_text(set: &PaletteSet, color: bool) -> String {
    let mut out = String::new();
    for (i, (name, scale)) in palette_set_sections(set).into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let anchor = (name == "primary").then_some(set.anchor);
        out.push_str(&scale_text(name, scale, anchor, color));
    }
    if let Some(reference) = &set.reference {
        out.push('\n');
        out.push_str(&reference_text(reference, color));
    }
    out
}

pub fn palette_set_css(set: &PaletteSet) -> String {
    let mut body: String = palette_set_sections(set)
        .into_iter()
        .map(|(prefix, scale)| css_variables(prefix, scale_entries(scale)))
        .collect();
    if let Some(reference) = &set.reference {
        let entries = reference.shades.iter().map(|s| (s.shade, s.hex.as_str()));
        body.push_str(&css_variables("reference", entries));
    }
    css_block(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_grid;
    use crate::palette_set::GenerateConfig;
    use crate::scale::generate_scale;
    use tempfile::TempDir;

    #[test]
    fn test_css_variables() {
        let scale = generate_scale("#3B82F6").scale;
        let css = css_root([("primary", &scale)]);
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --primary-500: #3b82f6;\n"));
        assert_eq!(css.matches("--primary-").count(), 11);
    }

    #[test]
    fn test_scale_text_marks_anchor() {
        let result = generate_scale("#3B82F6");
        let text = scale_text("primary", &result.scale, Some(result.anchor), false);
        let anchor_line = text.lines().find(|l| l.contains("<- anchor")).expect("anchor row");
        assert!(anchor_line.contains("500"));
        assert!(anchor_line.contains("#3b82f6"));
        assert_eq!(text.lines().count(), 12);
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_scale_text_color() {
        let scale = generate_scale("#3B82F6").scale;
        let text = scale_text("primary", &scale, None, true);
        assert!(text.contains("\x1b[48;2;"));
    }

    #[test]
    fn test_contrast_text() {
        let grid = contrast_grid(&generate_scale("#3B82F6").scale);
        let text = contrast_text(&grid, false);
        assert_eq!(text.lines().count(), 12);
        assert!(text.contains("1.00"));

        let levels = contrast_text(&grid, true);
        assert!(levels.contains("AAA"));
        assert!(levels.contains('-'));
    }

    #[test]
    fn test_palette_set_renderers() {
        let config = GenerateConfig { reference: true, ..GenerateConfig::default() };
        let set = PaletteSet::generate("#3B82F6", &config);

        let css = palette_set_css(&set);
        assert_eq!(css.matches(":root").count(), 1);
        assert!(css.contains("--danger-500:"));
        assert!(css.contains("--reference-500: #3b82f6;"));
        assert!(css.ends_with("}\n"));

        let text = palette_set_text(&set, false);
        assert!(text.contains("Reference: blue"));
        assert!(text.contains("complementary"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&generate_scale("#3B82F6")).expect("serialize");
        assert!(json.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["anchor"], "500");
    }

    #[test]
    fn test_write_output_creates_dirs() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("nested").join("palette.css");
        write_output(&path, ":root {}\n").expect("should write output");
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), ":root {}\n");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Css.to_string(), "css");
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
