use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{Color, ColorParseError, Hsl, Hsv, Rgb};

static HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("hex color regex")
});

static RGB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:rgba?)\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+)\s*)?\)$")
        .expect("rgb color regex")
});

static HSL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:hsla?)\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*(?:,\s*([\d.]+)\s*)?\)$")
        .expect("hsl color regex")
});

static HSV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:hsv)\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)$").expect("hsv color regex")
});

/// Tries each grammar in turn: hex, rgb/rgba, hsl/hsla, hsv.
///
/// Components outside their range are clamped (channels to 0–255, percentages
/// to 0–100, alpha to 0–1) and hues wrap around 360.
pub(super) fn parse(raw: &str) -> Result<Color, ColorParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(caps) = HEX.captures(text) {
        let channel = |index: usize| u8::from_str_radix(&caps[index], 16).unwrap_or_default();
        return Ok(Color::from_rgb(channel(1), channel(2), channel(3)));
    }

    if let Some(caps) = RGB.captures(text) {
        let rgb = Rgb::new(
            channel(&caps[1]),
            channel(&caps[2]),
            channel(&caps[3]),
        );
        return Ok(Color::from_rgba(rgb, alpha(&caps)?));
    }

    if let Some(caps) = HSL.captures(text) {
        let hsl = Hsl {
            h: hue(&caps[1]),
            s: percent(&caps[2]),
            l: percent(&caps[3]),
        };
        return Ok(Color::from_hsla(hsl, alpha(&caps)?));
    }

    if let Some(caps) = HSV.captures(text) {
        return Ok(Color::from_hsv(Hsv {
            h: hue(&caps[1]),
            s: percent(&caps[2]),
            v: percent(&caps[3]),
        }));
    }

    Err(ColorParseError::Unrecognized(text.to_string()))
}

// The grammars only admit ASCII digits, so a failed integer parse means overflow.
fn integer(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn channel(digits: &str) -> u8 {
    integer(digits).min(255) as u8
}

fn percent(digits: &str) -> f64 {
    f64::from(integer(digits).min(100))
}

fn hue(digits: &str) -> f64 {
    f64::from(integer(digits) % 360)
}

fn alpha(caps: &Captures<'_>) -> Result<f64, ColorParseError> {
    match caps.get(4) {
        None => Ok(1.0),
        Some(raw) => raw
            .as_str()
            .parse::<f64>()
            .map(|value| value.clamp(0.0, 1.0))
            .map_err(|_| ColorParseError::InvalidAlpha(raw.as_str().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::{format_color, parse_color, ColorFormat};
    use super::*;

    #[test]
    fn rejects_empty_garbage_and_wrong_hex_lengths() {
        for text in [
            "",
            "   ",
            "not-a-color",
            "#12345",
            "#fff",
            "#ffff",
            "#ff00ff00",
            "#gg0000",
            "ff0000",
            "cmyk(0, 0, 0, 0)",
            "rgb(1, 2)",
            "hsl(10, 20, 30)",
            "see rgb(1, 2, 3) here",
        ] {
            assert_eq!(parse_color(text), None, "{text:?}");
        }
    }

    #[test]
    fn reports_why_parsing_failed() {
        assert_eq!(parse(""), Err(ColorParseError::Empty));
        assert_eq!(
            parse("chartreuse"),
            Err(ColorParseError::Unrecognized("chartreuse".to_string()))
        );
        assert_eq!(
            parse("rgba(1, 2, 3, 0.5.5)"),
            Err(ColorParseError::InvalidAlpha("0.5.5".to_string()))
        );
    }

    #[test]
    fn hex_digits_are_case_insensitive() {
        let upper = parse("#ABCDEF").expect("upper");
        let lower = parse("#abcdef").expect("lower");
        assert_eq!(upper, lower);
        assert_eq!(upper.rgb(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn rgb_alpha_defaults_to_opaque() {
        let opaque = parse("rgb(12, 34, 56)").expect("rgb");
        assert_eq!(opaque.alpha(), 1.0);
        let translucent = parse("rgba(12,34,56,0.25)").expect("rgba");
        assert_eq!(translucent.alpha(), 0.25);
        assert_eq!(translucent.rgb(), opaque.rgb());
    }

    #[test]
    fn hsl_input_is_converted_through_rgb() {
        let parsed = parse("hsla(120, 100%, 25%, 0.5)").expect("hsla");
        assert_eq!(parsed.rgb(), Rgb::new(0, 128, 0));
        assert_eq!(parsed.alpha(), 0.5);
        assert_eq!(
            format_color(&parsed, ColorFormat::Hsla, true),
            "hsla(120, 100%, 25%, 0.5)"
        );
    }

    #[test]
    fn hsv_output_parses_back() {
        let original = parse("#3366cc").expect("hex");
        let text = format_color(&original, ColorFormat::Hsv, false);
        assert_eq!(text, "hsv(220, 75%, 80%)");
        assert_eq!(parse(&text).expect("hsv").rgb(), original.rgb());
    }

    #[test]
    fn out_of_range_components_are_clamped() {
        let hot = parse("rgb(999, 0, 0)").expect("rgb");
        assert_eq!(hot.rgb(), Rgb::new(255, 0, 0));
        let huge = parse("rgb(99999999999999, 300, 256)").expect("rgb");
        assert_eq!(huge.rgb(), Rgb::new(255, 255, 255));
        assert_eq!(parse("rgba(0, 0, 0, 7)").expect("rgba").alpha(), 1.0);
        let wrapped = parse("hsl(480, 100%, 50%)").expect("hsl");
        assert_eq!(wrapped.rgb(), parse("hsl(120, 100%, 50%)").expect("hsl").rgb());
        let saturated = parse("hsl(0, 250%, 50%)").expect("hsl");
        assert_eq!(saturated.rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse("  #00ff00 ").expect("hex").rgb(),
            Rgb::new(0, 255, 0)
        );
    }
}
