//! Value rules for the color-picker widget.

use super::{format_color, parse_color, Color, ColorFormat};

/// Value a picker falls back to when cleared.
pub const CLEAR_COLOR: &str = "#000000";

/// Default swatch palette shown under "Presets".
pub const DEFAULT_PRESETS: [&str; 20] = [
    "#FF0000", "#FF4500", "#FFA500", "#FFD700", "#FFFF00", "#ADFF2F", "#00FF00", "#00FFFF",
    "#0000FF", "#4169E1", "#8A2BE2", "#FF00FF", "#FF1493", "#FF69B4", "#FFC0CB", "#000000",
    "#404040", "#808080", "#C0C0C0", "#FFFFFF",
];

/// Formats offered by the dropdown's format selector.
pub const SELECTOR_FORMATS: [ColorFormat; 3] =
    [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

/// Parses `text` and re-serializes it in the picker's output format.
///
/// Returns `None` for text that is not a color; the edit should then be ignored
/// and the previous value kept.
pub fn normalize_color_input(
    text: &str,
    format: ColorFormat,
    include_alpha: bool,
) -> Option<String> {
    parse_color(text).map(|color| format_color(&color, format, include_alpha))
}

/// Whether two color strings denote the same color, regardless of format.
pub fn same_color(left: &str, right: &str) -> bool {
    match (parse_color(left), parse_color(right)) {
        (Some(left), Some(right)) => {
            left.rgb() == right.rgb() && (left.alpha() - right.alpha()).abs() < f64::EPSILON
        }
        _ => false,
    }
}

/// CSS `background-color` for a swatch; unparseable input renders as the clear color.
pub fn swatch_background(text: &str) -> String {
    parse_color(text)
        .map(|color| format_color(&color, ColorFormat::Rgba, true))
        .unwrap_or_else(|| CLEAR_COLOR.to_string())
}

/// CSS gradient for the opacity slider preview.
pub fn alpha_gradient(color: &Color) -> String {
    format!(
        "linear-gradient(to right, transparent, {})",
        format_color(color, ColorFormat::Rgb, false)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_presets_all_parse() {
        for preset in DEFAULT_PRESETS {
            assert!(parse_color(preset).is_some(), "{preset}");
        }
    }

    #[test]
    fn normalizes_into_the_requested_format() {
        assert_eq!(
            normalize_color_input("#FF0000", ColorFormat::Rgb, false).as_deref(),
            Some("rgb(255, 0, 0)")
        );
        assert_eq!(
            normalize_color_input("rgba(0, 0, 255, 0.4)", ColorFormat::Rgba, true).as_deref(),
            Some("rgba(0, 0, 255, 0.4)")
        );
        assert_eq!(normalize_color_input("#12", ColorFormat::Hex, false), None);
    }

    #[test]
    fn same_color_ignores_format_and_case() {
        assert!(same_color("#FF0000", "rgb(255, 0, 0)"));
        assert!(same_color("#ff0000", "hsl(0, 100%, 50%)"));
        assert!(!same_color("#ff0000", "rgba(255, 0, 0, 0.5)"));
        assert!(!same_color("#ff0000", "oops"));
    }

    #[test]
    fn swatch_background_falls_back_to_clear_color() {
        assert_eq!(swatch_background("#00ff00"), "rgba(0, 255, 0, 1)");
        assert_eq!(swatch_background("nope"), CLEAR_COLOR);
        let teal = parse_color("#008080").expect("teal");
        assert_eq!(
            alpha_gradient(&teal),
            "linear-gradient(to right, transparent, rgb(0, 128, 128))"
        );
    }
}
