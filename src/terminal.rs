//! Terminal rendering utilities for colored swatches
//!
//! Provides ANSI escape sequence generation for showing scale colors with
//! true-color backgrounds in terminal emulators that support 24-bit color.

use image::Rgba;

use crate::config::ColorMode;
use crate::contrast::readable_text_color;

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert RGBA color to ANSI 24-bit background escape sequence.
///
/// # Examples
///
/// ```
/// use huescale::terminal::color_to_ansi_bg;
/// use image::Rgba;
///
/// let red = color_to_ansi_bg(Rgba([255, 0, 0, 255]));
/// assert_eq!(red, "\x1b[48;2;255;0;0m");
/// ```
pub fn color_to_ansi_bg(rgba: Rgba<u8>) -> String {
    format!("\x1b[48;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
}

/// Convert RGBA color to ANSI 24-bit foreground escape sequence.
pub fn color_to_ansi_fg(rgba: Rgba<u8>) -> String {
    format!("\x1b[38;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
}

/// Render `label` on a `background` swatch, with black or white text
/// depending on which is more readable.
///
/// # Examples
///
/// ```
/// use huescale::terminal::swatch;
/// use image::Rgba;
///
/// let cell = swatch(Rgba([0, 0, 0, 255]), "950");
/// assert!(cell.starts_with("\x1b[48;2;0;0;0m\x1b[38;2;255;255;255m"));
/// assert!(cell.ends_with("\x1b[0m"));
/// ```
pub fn swatch(background: Rgba<u8>, label: &str) -> String {
    let text = readable_text_color(background);
    format!(
        "{}{} {} {}",
        color_to_ansi_bg(background),
        color_to_ansi_fg(text),
        label,
        ANSI_RESET
    )
}

/// Render a row of swatches, one per `(color, label)` pair.
pub fn swatch_row<'a>(cells: impl IntoIterator<Item = (Rgba<u8>, &'a str)>) -> String {
    cells.into_iter().map(|(rgba, label)| swatch(rgba, label)).collect()
}

/// Decide whether to emit ANSI colors for stdout.
pub fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_ansi_bg() {
        let red = color_to_ansi_bg(Rgba([255, 0, 0, 255]));
        assert_eq!(red, "\x1b[48;2;255;0;0m");

        let blue = color_to_ansi_bg(Rgba([0, 0, 255, 255]));
        assert_eq!(blue, "\x1b[48;2;0;0;255m");
    }

    #[test]
    fn test_color_to_ansi_fg() {
        let green = color_to_ansi_fg(Rgba([0, 255, 0, 255]));
        assert_eq!(green, "\x1b[38;2;0;255;0m");
    }

    #[test]
    fn test_swatch_text_color() {
        // Light background gets black text
        let light = swatch(Rgba([239, 246, 255, 255]), "50");
        assert!(light.contains("\x1b[38;2;0;0;0m"));
        assert!(light.contains(" 50 "));

        // Dark background gets white text
        let dark = swatch(Rgba([23, 37, 84, 255]), "950");
        assert!(dark.contains("\x1b[38;2;255;255;255m"));
    }

    #[test]
    fn test_swatch_row() {
        let row = swatch_row([(Rgba([255, 255, 255, 255]), "a"), (Rgba([0, 0, 0, 255]), "b")]);
        assert_eq!(row.matches(ANSI_RESET).count(), 2);
        assert!(row.find(" a ").expect("a") < row.find(" b ").expect("b"));
    }

    #[test]
    fn test_use_color_forced() {
        assert!(use_color(ColorMode::Always));
        assert!(!use_color(ColorMode::Never));
    }
}
