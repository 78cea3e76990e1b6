//! Parsing, truncation, formatting and range checks for number and decimal inputs.
//!
//! Decimal inputs use two numeric paths on purpose: while typing, digits past
//! the configured precision are cut from the *string* so the caret is never
//! disturbed; the committed number is rounded when parsed and re-formatted to a
//! fixed number of places on blur.

use serde::{Deserialize, Serialize};

/// Keys that never go through character filtering.
pub const CONTROL_KEYS: [&str; 8] = [
    "Backspace",
    "Delete",
    "Tab",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
    "Enter",
];

/// Whether a keystroke bypasses character filters (navigation/editing keys or
/// a held modifier).
pub fn is_control_key(key: &str, modifier_held: bool) -> bool {
    modifier_held || CONTROL_KEYS.contains(&key)
}

/// Keystroke filter for integer inputs: digits and minus.
pub fn is_integer_key(key: &str) -> bool {
    matches!(single_char(key), Some(ch) if ch.is_ascii_digit() || ch == '-')
}

/// Keystroke filter for decimal inputs: digits, a single decimal point, and a
/// minus sign only at the start of the field.
pub fn is_decimal_key(key: &str, current: &str, caret_at_start: bool) -> bool {
    match single_char(key) {
        Some(ch) if ch.is_ascii_digit() => true,
        Some('.') => !current.contains('.'),
        Some('-') => caret_at_start,
        _ => false,
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Parses integer input. Empty text and a lone `-` mean "no value"; otherwise
/// the leading integer is used (`"12abc"` is 12).
pub fn parse_integer_input(text: &str) -> Option<i64> {
    let text = text.trim_start();
    if text.is_empty() || text == "-" {
        return None;
    }
    let end = numeric_prefix_len(text, false);
    text[..end].parse().ok()
}

/// Cuts digits after the decimal point down to `precision`. No rounding happens.
pub fn truncate_decimal_input(text: &str, precision: u8) -> String {
    match text.find('.') {
        Some(dot) => {
            let keep = dot + 1 + usize::from(precision);
            text.char_indices()
                .take_while(|(index, _)| *index < keep)
                .map(|(_, ch)| ch)
                .collect()
        }
        None => text.to_string(),
    }
}

/// Parses decimal input and rounds it to `precision` places. `""`, `"-"` and
/// `"."` mean "no value".
pub fn parse_decimal_input(text: &str, precision: u8) -> Option<f64> {
    let text = text.trim_start();
    if matches!(text, "" | "-" | ".") {
        return None;
    }
    let end = numeric_prefix_len(text, true);
    let value: f64 = text[..end].parse().ok()?;
    value.is_finite().then(|| round_to_precision(value, precision))
}

/// Rounds half up at `precision` decimal places.
pub fn round_to_precision(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (value * factor + 0.5).floor() / factor
}

/// Fixed-point rendering used when a decimal field loses focus.
pub fn format_decimal(value: f64, precision: u8) -> String {
    format!("{value:.prec$}", prec = usize::from(precision))
}

/// Text a decimal draft should switch to after the owner's value changes, or
/// `None` while the draft already reads as `value`. Keeps mid-edit text such as
/// `1` or `1.` intact when a controlled owner echoes the edit back.
pub fn resync_decimal_draft(draft: &str, value: Option<f64>, precision: u8) -> Option<String> {
    if parse_decimal_input(draft, precision) == value {
        return None;
    }
    Some(value.map(|value| format_decimal(value, precision)).unwrap_or_default())
}

/// Integer counterpart of [`resync_decimal_draft`].
pub fn resync_integer_draft(draft: &str, value: Option<i64>) -> Option<String> {
    if parse_integer_input(draft) == value {
        return None;
    }
    Some(value.map(|value| value.to_string()).unwrap_or_default())
}

/// Native `step` attribute matching `precision` (2 ⇒ 0.01).
pub fn decimal_step(precision: u8) -> f64 {
    10f64.powi(-i32::from(precision))
}

/// Placeholder showing the expected shape (`0.00` for precision 2).
pub fn decimal_placeholder(precision: u8) -> String {
    format!("0.{}", "0".repeat(usize::from(precision)))
}

/// Length of the numeric prefix of `text`: optional sign, digits and, when
/// `fractional`, one decimal point plus an exponent.
fn numeric_prefix_len(text: &str, fractional: bool) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if fractional && end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    let mantissa = &text[digits_start..end];
    if !mantissa.bytes().any(|byte| byte.is_ascii_digit()) {
        return 0;
    }
    if fractional && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    end
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Optional inclusive bounds for numeric inputs.
pub struct NumberBounds {
    /// Lower bound.
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper bound.
    #[serde(default)]
    pub max: Option<f64>,
}

impl NumberBounds {
    /// Bounds with both ends set.
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Whether `value` lies inside the bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Message describing the bounds, used when a value fails validation.
    pub fn message(&self) -> Option<String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                Some(format!("Please enter a number between {min} and {max}"))
            }
            (Some(min), None) => Some(format!(
                "Please enter a number greater than or equal to {min}"
            )),
            (None, Some(max)) => Some(format!("Please enter a number less than or equal to {max}")),
            (None, None) => None,
        }
    }
}

/// Built-in numeric validity: a missing value is only invalid when required.
pub fn validate_number(value: Option<f64>, bounds: &NumberBounds, required: bool) -> bool {
    match value {
        None => !required,
        Some(value) => bounds.contains(value),
    }
}

/// Message for an invalid numeric field. Only present values get a bounds
/// message; otherwise the owner's error (if any) is shown.
pub fn range_error(value: Option<f64>, valid: bool, bounds: &NumberBounds) -> Option<String> {
    if valid || value.is_none() {
        None
    } else {
        bounds.message()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Decimal input configuration.
pub struct DecimalOptions {
    /// Digits kept after the decimal point.
    pub precision: u8,
    /// Inclusive bounds.
    pub bounds: NumberBounds,
}

impl Default for DecimalOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            bounds: NumberBounds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn typing_truncates_while_blur_rounds() {
        let typed = truncate_decimal_input("12.345", 2);
        assert_eq!(typed, "12.34");
        assert_eq!(parse_decimal_input(&typed, 2), Some(12.34));
        assert_eq!(format_decimal(12.345, 2), "12.35");
    }

    #[test]
    fn owner_echo_leaves_matching_drafts_alone() {
        assert_eq!(resync_decimal_draft("1", Some(1.0), 2), None);
        assert_eq!(resync_decimal_draft("1.", Some(1.0), 2), None);
        assert_eq!(resync_decimal_draft("-", None, 2), None);
        assert_eq!(resync_decimal_draft("1", Some(3.5), 2), Some("3.50".to_string()));
        assert_eq!(resync_decimal_draft("4.2", None, 2), Some(String::new()));

        assert_eq!(resync_integer_draft("-", None), None);
        assert_eq!(resync_integer_draft("12", Some(12)), None);
        assert_eq!(resync_integer_draft("12", Some(7)), Some("7".to_string()));
    }

    #[test]
    fn truncation_leaves_short_input_alone() {
        assert_eq!(truncate_decimal_input("12.3", 2), "12.3");
        assert_eq!(truncate_decimal_input("12", 2), "12");
        assert_eq!(truncate_decimal_input("-0.98765", 3), "-0.987");
        assert_eq!(truncate_decimal_input("5.", 0), "5.");
    }

    #[test]
    fn decimal_parse_handles_partial_input() {
        assert_eq!(parse_decimal_input("", 2), None);
        assert_eq!(parse_decimal_input("-", 2), None);
        assert_eq!(parse_decimal_input(".", 2), None);
        assert_eq!(parse_decimal_input("abc", 2), None);
        assert_eq!(parse_decimal_input(".5", 2), Some(0.5));
        assert_eq!(parse_decimal_input("3.", 2), Some(3.0));
        assert_eq!(parse_decimal_input("1.005", 2), Some(1.0));
        assert_eq!(parse_decimal_input("2.675", 1), Some(2.7));
        assert_eq!(parse_decimal_input("1e2", 2), Some(100.0));
        assert_eq!(parse_decimal_input("7.25kg", 2), Some(7.25));
    }

    #[test]
    fn integer_parse_uses_leading_digits() {
        assert_eq!(parse_integer_input(""), None);
        assert_eq!(parse_integer_input("-"), None);
        assert_eq!(parse_integer_input("42"), Some(42));
        assert_eq!(parse_integer_input("-17"), Some(-17));
        assert_eq!(parse_integer_input("12abc"), Some(12));
        assert_eq!(parse_integer_input("3.9"), Some(3));
        assert_eq!(parse_integer_input("x1"), None);
    }

    #[test]
    fn keystroke_filters() {
        assert!(is_control_key("Backspace", false));
        assert!(is_control_key("v", true));
        assert!(!is_control_key("v", false));

        assert!(is_integer_key("7"));
        assert!(is_integer_key("-"));
        assert!(!is_integer_key("."));
        assert!(!is_integer_key("Shift"));

        assert!(is_decimal_key(".", "12", false));
        assert!(!is_decimal_key(".", "1.2", false));
        assert!(is_decimal_key("-", "", true));
        assert!(!is_decimal_key("-", "12", false));
        assert!(!is_decimal_key("e", "12", false));
    }

    #[test]
    fn bounds_messages_depend_on_which_ends_are_set() {
        assert_eq!(
            NumberBounds::between(0.0, 10.0).message().as_deref(),
            Some("Please enter a number between 0 and 10")
        );
        assert_eq!(
            NumberBounds {
                min: Some(1.5),
                max: None
            }
            .message()
            .as_deref(),
            Some("Please enter a number greater than or equal to 1.5")
        );
        assert_eq!(
            NumberBounds {
                min: None,
                max: Some(99.0)
            }
            .message()
            .as_deref(),
            Some("Please enter a number less than or equal to 99")
        );
        assert_eq!(NumberBounds::default().message(), None);
    }

    #[test]
    fn validation_is_advisory_and_respects_required() {
        let bounds = NumberBounds::between(1.0, 5.0);
        assert!(validate_number(None, &bounds, false));
        assert!(!validate_number(None, &bounds, true));
        assert!(validate_number(Some(5.0), &bounds, true));
        assert!(!validate_number(Some(5.01), &bounds, false));

        assert_eq!(
            range_error(Some(9.0), false, &bounds).as_deref(),
            Some("Please enter a number between 1 and 5")
        );
        assert_eq!(range_error(None, false, &bounds), None);
        assert_eq!(range_error(Some(3.0), true, &bounds), None);
    }

    #[test]
    fn precision_helpers() {
        assert_eq!(decimal_step(2), 0.01);
        assert_eq!(decimal_step(0), 1.0);
        assert_eq!(decimal_placeholder(3), "0.000");
        assert_eq!(format_decimal(3.0, 0), "3");
        assert_eq!(DecimalOptions::default().precision, 2);
    }
}
