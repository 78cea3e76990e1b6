//! Color values, textual color formats, and the conversions between them.
//!
//! A [`Color`] keeps one canonical RGB triplet plus alpha. Every other view
//! (hex, HSL, HSV) is derived from that truth when the value is built, so the
//! views always agree. Values are immutable: edits produce a new [`Color`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod convert;
mod parse;
pub mod picker;

pub use convert::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a color string could not be turned into a [`Color`].
pub enum ColorParseError {
    /// The input was empty or whitespace only.
    #[error("color string is empty")]
    Empty,
    /// The input matched none of the supported grammars.
    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
    /// The alpha term of an `rgba(...)`/`hsla(...)` string is not a number.
    #[error("invalid alpha component `{0}`")]
    InvalidAlpha(String),
    /// A format name did not match any [`ColorFormat`].
    #[error("unknown color format `{0}`")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// 8-bit RGB triplet.
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Builds a triplet from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// RGB triplet with an alpha channel in `[0, 1]`.
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Hue/saturation/lightness; hue in degrees, saturation and lightness in percent.
pub struct Hsl {
    /// Hue in `[0, 360)`.
    pub h: f64,
    /// Saturation in `[0, 100]`.
    pub s: f64,
    /// Lightness in `[0, 100]`.
    pub l: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// [`Hsl`] with an alpha channel.
pub struct Hsla {
    /// Hue in `[0, 360)`.
    pub h: f64,
    /// Saturation in `[0, 100]`.
    pub s: f64,
    /// Lightness in `[0, 100]`.
    pub l: f64,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Hue/saturation/value; hue in degrees, saturation and value in percent.
pub struct Hsv {
    /// Hue in `[0, 360)`.
    pub h: f64,
    /// Saturation in `[0, 100]`.
    pub s: f64,
    /// Value in `[0, 100]`.
    pub v: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Textual serializations supported by [`format_color`].
pub enum ColorFormat {
    /// `#rrggbb`.
    #[default]
    Hex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `rgba(r, g, b, a)`.
    Rgba,
    /// `hsl(h, s%, l%)`.
    Hsl,
    /// `hsla(h, s%, l%, a)`.
    Hsla,
    /// `hsv(h, s%, v%)`.
    Hsv,
}

impl ColorFormat {
    /// Every format, in selector order.
    pub const ALL: [ColorFormat; 6] = [
        Self::Hex,
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
    ];

    /// Stable lowercase token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
        }
    }

    /// Uppercase label used by format selector buttons.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Hsl => "HSL",
            Self::Hsla => "HSLA",
            Self::Hsv => "HSV",
        }
    }

    /// Whether the serialization carries an alpha term.
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsla)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.token().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ColorParseError::UnknownFormat(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Immutable color value with eagerly computed views.
pub struct Color {
    hex: String,
    rgb: Rgb,
    alpha: f64,
    hsl: Hsl,
    hsv: Hsv,
}

impl Color {
    /// Builds an opaque color from RGB channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(Rgb::new(r, g, b), 1.0)
    }

    /// Builds a color from an RGB triplet and alpha. Alpha is clamped to `[0, 1]`;
    /// a NaN alpha is treated as opaque.
    pub fn from_rgba(rgb: Rgb, alpha: f64) -> Self {
        Self {
            hex: hex_string(rgb),
            rgb,
            alpha: clamp_alpha(alpha),
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Builds a color from HSL components. The derived views are recomputed from
    /// the resulting RGB triplet.
    pub fn from_hsla(hsl: Hsl, alpha: f64) -> Self {
        Self::from_rgba(hsl_to_rgb(hsl), alpha)
    }

    /// Builds an opaque color from HSV components.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::from_rgba(hsv_to_rgb(hsv), 1.0)
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            alpha: clamp_alpha(alpha),
            ..self.clone()
        }
    }

    /// Lowercase `#rrggbb` view.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// RGB view.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// RGB + alpha view.
    pub fn rgba(&self) -> Rgba {
        Rgba {
            r: self.rgb.r,
            g: self.rgb.g,
            b: self.rgb.b,
            a: self.alpha,
        }
    }

    /// HSL view.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// HSL + alpha view.
    pub fn hsla(&self) -> Hsla {
        Hsla {
            h: self.hsl.h,
            s: self.hsl.s,
            l: self.hsl.l,
            a: self.alpha,
        }
    }

    /// HSV view.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Opacity in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Serializes the color; see [`format_color`].
    pub fn to_format(&self, format: ColorFormat, include_alpha: bool) -> String {
        format_color(self, format, include_alpha)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse::parse(raw)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Parses `text` as a color, returning `None` when no grammar matches.
///
/// Accepted forms are `#rrggbb`, `rgb(...)`/`rgba(...)`, `hsl(...)`/`hsla(...)`
/// and `hsv(...)`. Short and long hex forms (`#fff`, `#rrggbbaa`) are rejected.
pub fn parse_color(text: &str) -> Option<Color> {
    text.parse().ok()
}

/// Serializes `color` in `format`.
///
/// `include_alpha` only affects `rgba`/`hsla`; when false the alpha term is
/// written as `1`. Hue, saturation, lightness and value are rounded to whole
/// numbers.
pub fn format_color(color: &Color, format: ColorFormat, include_alpha: bool) -> String {
    let alpha = if include_alpha { color.alpha } else { 1.0 };
    match format {
        ColorFormat::Hex => color.hex.clone(),
        ColorFormat::Rgb => {
            let Rgb { r, g, b } = color.rgb;
            format!("rgb({r}, {g}, {b})")
        }
        ColorFormat::Rgba => {
            let Rgb { r, g, b } = color.rgb;
            format!("rgba({r}, {g}, {b}, {alpha})")
        }
        ColorFormat::Hsl => {
            let (h, s, l) = rounded_hsl(color.hsl);
            format!("hsl({h}, {s}%, {l}%)")
        }
        ColorFormat::Hsla => {
            let (h, s, l) = rounded_hsl(color.hsl);
            format!("hsla({h}, {s}%, {l}%, {alpha})")
        }
        ColorFormat::Hsv => {
            let hsv = color.hsv;
            format!(
                "hsv({}, {}%, {}%)",
                round_hue(hsv.h),
                round_percent(hsv.s),
                round_percent(hsv.v)
            )
        }
    }
}

fn hex_string(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

fn rounded_hsl(hsl: Hsl) -> (u16, u8, u8) {
    (round_hue(hsl.h), round_percent(hsl.s), round_percent(hsl.l))
}

fn round_hue(hue: f64) -> u16 {
    (hue.round().rem_euclid(360.0)) as u16
}

fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn color(text: &str) -> Color {
        parse_color(text).expect("valid color")
    }

    #[test]
    fn hex_round_trip_is_identity_after_case_normalization() {
        for hex in ["#000000", "#ffffff", "#FF4500", "#4169e1", "#8A2BE2", "#0a0B0c"] {
            assert_eq!(
                format_color(&color(hex), ColorFormat::Hex, false),
                hex.to_ascii_lowercase()
            );
        }
    }

    #[test]
    fn every_hex_value_survives_parse_and_format() {
        for value in (0u32..=0xff_ffff).step_by(0x0101_07) {
            let hex = format!("#{value:06x}");
            assert_eq!(format_color(&color(&hex), ColorFormat::Hex, false), hex);
        }
    }

    #[test]
    fn rgba_round_trip_preserves_channels_and_alpha() {
        for (r, g, b, a) in [
            (0, 0, 0, 0.0),
            (255, 255, 255, 1.0),
            (12, 200, 99, 0.35),
            (1, 2, 3, 0.125),
            (250, 128, 7, 0.999),
        ] {
            let source = Color::from_rgba(Rgb::new(r, g, b), a);
            let text = format_color(&source, ColorFormat::Rgba, true);
            let parsed = color(&text);
            assert_eq!(parsed.rgb(), Rgb::new(r, g, b));
            assert!((parsed.alpha() - a).abs() < 1e-9, "{text}");
        }
    }

    #[test]
    fn alpha_is_forced_opaque_when_not_requested() {
        let translucent = color("rgba(10, 20, 30, 0.5)");
        assert_eq!(
            format_color(&translucent, ColorFormat::Rgba, false),
            "rgba(10, 20, 30, 1)"
        );
        assert_eq!(
            format_color(&translucent, ColorFormat::Rgba, true),
            "rgba(10, 20, 30, 0.5)"
        );
        assert_eq!(
            format_color(&translucent, ColorFormat::Hsla, true),
            "hsla(210, 50%, 8%, 0.5)"
        );
        assert_eq!(format_color(&translucent, ColorFormat::Hex, true), "#0a141e");
        assert_eq!(
            format_color(&translucent, ColorFormat::Rgb, true),
            "rgb(10, 20, 30)"
        );
    }

    #[test]
    fn formats_every_view_of_a_saturated_color() {
        let orange = color("#ff4500");
        assert_eq!(format_color(&orange, ColorFormat::Rgb, false), "rgb(255, 69, 0)");
        assert_eq!(format_color(&orange, ColorFormat::Hsl, false), "hsl(16, 100%, 50%)");
        assert_eq!(format_color(&orange, ColorFormat::Hsv, false), "hsv(16, 100%, 100%)");
        assert_eq!(
            format_color(&orange, ColorFormat::Hsla, false),
            "hsla(16, 100%, 50%, 1)"
        );
    }

    #[test]
    fn views_agree_with_each_other() {
        let sample = color("hsl(200, 60%, 40%)");
        assert_eq!(hsl_to_rgb(sample.hsl()), sample.rgb());
        assert_eq!(hsv_to_rgb(sample.hsv()), sample.rgb());
        let rgb = sample.rgb();
        assert_eq!(sample.hex(), format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b));
    }

    #[test]
    fn with_alpha_returns_new_value() {
        let base = Color::from_rgb(1, 2, 3);
        let faded = base.with_alpha(0.25);
        assert_eq!(base.alpha(), 1.0);
        assert_eq!(faded.alpha(), 0.25);
        assert_eq!(faded.rgb(), base.rgb());
        assert_eq!(base.with_alpha(4.0).alpha(), 1.0);
        assert_eq!(base.with_alpha(f64::NAN).alpha(), 1.0);
    }

    #[test]
    fn format_names_parse_and_serialize() {
        assert_eq!("HSLA".parse::<ColorFormat>(), Ok(ColorFormat::Hsla));
        assert_eq!(
            "cmyk".parse::<ColorFormat>(),
            Err(ColorParseError::UnknownFormat("cmyk".to_string()))
        );
        assert_eq!(
            serde_json::to_string(&ColorFormat::Rgba).expect("serialize"),
            "\"rgba\""
        );
        assert_eq!(ColorFormat::Hsv.to_string(), "hsv");
        assert!(ColorFormat::Rgba.has_alpha());
        assert!(!ColorFormat::Hex.has_alpha());
    }

    #[test]
    fn hue_that_rounds_up_to_full_turn_wraps_to_zero() {
        let almost_red = Color::from_rgb(255, 0, 1);
        assert!(almost_red.hsl().h > 359.5);
        assert_eq!(
            format_color(&almost_red, ColorFormat::Hsl, false),
            "hsl(0, 100%, 50%)"
        );
    }
}
