//! Color parsing and perceptual color conversion
//!
//! Input text is decoded to sRGB first (hex fast path, everything else via
//! lightningcss) and then lifted into OKLCH. Supported input formats:
//! - Hex: `#RRGGBB`, `RRGGBB`, plus the `#RGB`, `#RGBA`, `#RRGGBBAA` shorthands
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `oklch()`
//! - Named: `red`, `rebeccapurple`, etc.
//!
//! Alpha is always discarded; every color produced by this crate is opaque.

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use palette::white_point::D65;
use palette::{FromColor, Hsl, Lab, Oklch, Srgb};
use thiserror::Error;

/// Chroma below this is treated as achromatic (no meaningful hue).
pub const ACHROMATIC_EPSILON: f64 = 1e-4;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// A color in OKLCH with an explicit achromatic flag.
///
/// `l` is clamped to `[0, 1]` and `c` to `[0, inf)` on construction. `h` is
/// kept in `[0, 360)` and only carries meaning when `achromatic` is false;
/// use [`Color::hue`] or [`Color::hue_or_zero`] rather than reading it blind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub achromatic: bool,
}

/// HSL view of a color: hue in degrees, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslValue {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub achromatic: bool,
}

impl Color {
    /// Build a chromatic color. Out-of-range lightness and chroma are clamped.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l: clamp_unit(l), c: c.max(0.0), h: normalize_hue(h), achromatic: false }
    }

    /// Build a gray with the given lightness.
    pub fn gray(l: f64) -> Self {
        Self { l: clamp_unit(l), c: 0.0, h: 0.0, achromatic: true }
    }

    /// Convert an 8-bit sRGB color (alpha ignored) into OKLCH.
    pub fn from_rgba(rgba: Rgba<u8>) -> Self {
        let oklch: Oklch<f64> = Oklch::from_color(rgba_to_srgb(rgba));
        let l = oklch.l;
        let c = oklch.chroma;
        if c < ACHROMATIC_EPSILON {
            Self::gray(l)
        } else {
            Self::new(l, c, oklch.hue.into_positive_degrees())
        }
    }

    /// Hue in degrees, or `None` for achromatic colors.
    pub fn hue(&self) -> Option<f64> {
        if self.achromatic {
            None
        } else {
            Some(self.h)
        }
    }

    /// Hue in degrees, with achromatic colors mapped to 0.
    pub fn hue_or_zero(&self) -> f64 {
        self.hue().unwrap_or(0.0)
    }

    /// Convert back to 8-bit sRGB, clamping each channel into gamut.
    pub fn to_rgba(&self) -> Rgba<u8> {
        let oklch = Oklch::new(clamp_unit(self.l), self.c.max(0.0), self.hue_or_zero());
        let srgb: Srgb<f64> = Srgb::from_color(oklch);
        srgb_to_rgba(srgb)
    }

    /// Lowercase `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        rgba_to_hex(self.to_rgba())
    }

    /// The color that `to_hex` actually describes, after 8-bit rounding.
    pub fn quantize(&self) -> Color {
        Color::from_rgba(self.to_rgba())
    }

    /// Cylindrical HSL view of the quantized color.
    pub fn hsl(&self) -> HslValue {
        hsl_of(self.to_rgba())
    }

    /// CIE L*a*b* (D65) of the quantized color, used for deltaE.
    pub fn lab(&self) -> Lab<D65, f64> {
        lab_of(self.to_rgba())
    }
}

/// Parse color text straight into OKLCH.
///
/// # Examples
///
/// ```
/// use huescale::color::parse_color;
///
/// let blue = parse_color("#3B82F6").unwrap();
/// assert!((blue.l - 0.623).abs() < 0.001);
/// assert!(!blue.achromatic);
///
/// let gray = parse_color("808080").unwrap();
/// assert!(gray.achromatic);
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty or cannot be decoded.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    parse_rgba(s).map(Color::from_rgba)
}

/// Parse color text into 8-bit sRGB.
///
/// A leading `#` is optional for hex input. Text that is not made of hex
/// digits and has no `#` is handed to lightningcss, so `rgb(...)` and named
/// colors work too.
pub fn parse_rgba(s: &str) -> Result<Rgba<u8>, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_digits(hex);
    }

    // Bare hex like "3b82f6"
    if s.chars().all(|c| c.is_ascii_hexdigit()) && matches!(s.len(), 3 | 4 | 6 | 8) {
        return parse_hex_digits(s);
    }

    parse_css_color(s)
}

/// Parse the digits after the optional '#' (RGB, RGBA, RRGGBB, RRGGBBAA)
fn parse_hex_digits(hex: &str) -> Result<Rgba<u8>, ColorError> {
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 | 4 => {
            // Shorthand digits are doubled: "f" -> 0xff
            let r = hex_value(bytes[0]) * 17;
            let g = hex_value(bytes[1]) * 17;
            let b = hex_value(bytes[2]) * 17;
            Ok(Rgba([r, g, b, 255]))
        }
        6 | 8 => {
            let r = hex_value(bytes[0]) * 16 + hex_value(bytes[1]);
            let g = hex_value(bytes[2]) * 16 + hex_value(bytes[3]);
            let b = hex_value(bytes[4]) * 16 + hex_value(bytes[5]);
            Ok(Rgba([r, g, b, 255]))
        }
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Value of an ASCII hex digit; callers validate the digit first.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, oklch, named colors)
fn parse_css_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    css_color_to_rgba(css_color)
}

/// Convert a lightningcss CssColor to opaque RGBA
fn css_color_to_rgba(color: CssColor) -> Result<Rgba<u8>, ColorError> {
    use lightningcss::values::color::FloatColor;

    let rgb_color = color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok(Rgba([rgba.red, rgba.green, rgba.blue, 255])),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => Ok(Rgba([
                unit_to_u8(rgb.r as f64),
                unit_to_u8(rgb.g as f64),
                unit_to_u8(rgb.b as f64),
                255,
            ])),
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}

/// Lowercase `#rrggbb` for an 8-bit color (alpha ignored).
pub fn rgba_to_hex(rgba: Rgba<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", rgba[0], rgba[1], rgba[2])
}

/// CIE L*a*b* (D65) of an 8-bit color.
pub fn lab_of(rgba: Rgba<u8>) -> Lab<D65, f64> {
    Lab::from_color(rgba_to_srgb(rgba))
}

/// HSL of an 8-bit color. Grays report hue 0 and `achromatic = true`.
pub fn hsl_of(rgba: Rgba<u8>) -> HslValue {
    let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(rgba_to_srgb(rgba));
    let achromatic = rgba[0] == rgba[1] && rgba[1] == rgba[2];
    HslValue {
        h: if achromatic { 0.0 } else { hsl.hue.into_positive_degrees() },
        s: if achromatic { 0.0 } else { hsl.saturation },
        l: hsl.lightness,
        achromatic,
    }
}

/// Build an 8-bit color from HSL. Saturation may exceed 1; the resulting
/// channels are clamped rather than the saturation.
pub fn rgba_from_hsl(h: f64, s: f64, l: f64) -> Rgba<u8> {
    let hsl: Hsl<palette::encoding::Srgb, f64> =
        Hsl::new(normalize_hue(h), s.max(0.0), clamp_unit(l));
    let srgb: Srgb<f64> = Srgb::from_color(hsl);
    srgb_to_rgba(srgb)
}

/// Wrap any hue angle into `[0, 360)`.
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn unit_to_u8(v: f64) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

fn rgba_to_srgb(rgba: Rgba<u8>) -> Srgb<f64> {
    Srgb::new(rgba[0] as f64 / 255.0, rgba[1] as f64 / 255.0, rgba[2] as f64 / 255.0)
}

fn srgb_to_rgba(srgb: Srgb<f64>) -> Rgba<u8> {
    Rgba([unit_to_u8(srgb.red), unit_to_u8(srgb.green), unit_to_u8(srgb.blue), 255])
}
