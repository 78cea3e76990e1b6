//! North American phone masking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display format of a phone input.
pub enum PhoneMode {
    /// `(780) 699-5330`
    #[default]
    Local,
    /// `+1 (780) 699-5330`
    International,
}

impl PhoneMode {
    /// Resolves the pair of mode flags exposed by the widget. International only
    /// applies when local formatting has been switched off.
    pub fn from_flags(international: bool, local: bool) -> Self {
        if international && !local {
            Self::International
        } else {
            Self::Local
        }
    }

    /// Maximum digits accepted before edits are ignored.
    pub const fn max_digits(self) -> usize {
        match self {
            Self::Local => 10,
            Self::International => 11,
        }
    }

    /// Example number shown when the owner supplies no placeholder.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Local => "(780) 699-5330",
            Self::International => "+1 (780) 699-5330",
        }
    }

    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::International => "international",
        }
    }
}

/// Result of a phone edit that fits within the digit cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEdit {
    /// Masked text to display.
    pub formatted: String,
    /// Digits only.
    pub digits: String,
}

/// Keeps only ASCII digits.
pub fn unmask(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Formats the digits found in `text`. The output depends only on those digits
/// and the mode; digits beyond the mode's cap are dropped.
pub fn format_phone(text: &str, mode: PhoneMode) -> String {
    let digits = unmask(text);
    let digits = &digits[..digits.len().min(mode.max_digits())];
    let len = digits.len();
    match mode {
        PhoneMode::Local => match len {
            0 => String::new(),
            1..=3 => format!("({digits}"),
            4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
            _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        },
        PhoneMode::International => match len {
            0 => String::new(),
            1 => format!("+{digits}"),
            2..=4 => format!("+{} ({}", &digits[..1], &digits[1..]),
            5..=7 => format!("+{} ({}) {}", &digits[..1], &digits[1..4], &digits[4..]),
            _ => format!(
                "+{} ({}) {}-{}",
                &digits[..1],
                &digits[1..4],
                &digits[4..7],
                &digits[7..]
            ),
        },
    }
}

/// Applies raw input text. Returns `None` when it carries more digits than the
/// mode allows; the caller keeps the previous value in that case.
pub fn apply_phone_edit(raw: &str, mode: PhoneMode) -> Option<PhoneEdit> {
    let digits = unmask(raw);
    if digits.len() > mode.max_digits() {
        return None;
    }
    Some(PhoneEdit {
        formatted: format_phone(&digits, mode),
        digits,
    })
}

/// Empty input is valid; otherwise a complete number is required.
pub fn is_valid_phone(digits: &str, mode: PhoneMode) -> bool {
    if digits.is_empty() {
        return true;
    }
    match mode {
        PhoneMode::Local => digits.len() == 10,
        PhoneMode::International => digits.len() == 11 && digits.starts_with('1'),
    }
}

/// Message for an incomplete number. Empty input never gets one.
pub fn phone_error(digits: &str, mode: PhoneMode, valid: bool) -> Option<&'static str> {
    if valid || digits.is_empty() {
        return None;
    }
    Some(match mode {
        PhoneMode::Local => "Please enter a valid phone number (10 digits)",
        PhoneMode::International => "Please enter a valid international phone number (11 digits)",
    })
}

/// Keystroke filter: digits only.
pub fn is_phone_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn local_mask_builds_up_while_typing() {
        let typed = "7806995330";
        let steps: Vec<String> = (1..=typed.len())
            .map(|end| format_phone(&typed[..end], PhoneMode::Local))
            .collect();
        assert_eq!(
            steps,
            vec![
                "(7",
                "(78",
                "(780",
                "(780) 6",
                "(780) 69",
                "(780) 699",
                "(780) 699-5",
                "(780) 699-53",
                "(780) 699-533",
                "(780) 699-5330",
            ]
        );
    }

    #[test]
    fn international_mask_builds_up_while_typing() {
        assert_eq!(format_phone("1", PhoneMode::International), "+1");
        assert_eq!(format_phone("1780", PhoneMode::International), "+1 (780");
        assert_eq!(format_phone("1780699", PhoneMode::International), "+1 (780) 699");
        assert_eq!(
            format_phone("17806995330", PhoneMode::International),
            "+1 (780) 699-5330"
        );
    }

    #[test]
    fn formatting_is_a_function_of_digits_only() {
        assert_eq!(
            format_phone("(780) 699-5330", PhoneMode::Local),
            format_phone("780.699.5330", PhoneMode::Local)
        );
        assert_eq!(format_phone("", PhoneMode::Local), "");
        assert_eq!(format_phone("abc", PhoneMode::International), "");
        assert_eq!(format_phone("780699533012", PhoneMode::Local), "(780) 699-5330");
    }

    #[test]
    fn edit_past_the_cap_is_ignored() {
        let edit = apply_phone_edit("(780) 699-5330", PhoneMode::Local).expect("ten digits");
        assert_eq!(edit.formatted, "(780) 699-5330");
        assert_eq!(edit.digits, "7806995330");

        assert_eq!(apply_phone_edit("(780) 699-53301", PhoneMode::Local), None);
        assert!(apply_phone_edit("+1 (780) 699-53301", PhoneMode::International).is_none());
        assert!(apply_phone_edit("+1 (780) 699-5330", PhoneMode::International).is_some());
    }

    #[test]
    fn validity_and_messages() {
        assert!(is_valid_phone("", PhoneMode::Local));
        assert!(is_valid_phone("7806995330", PhoneMode::Local));
        assert!(!is_valid_phone("780699", PhoneMode::Local));
        assert!(is_valid_phone("17806995330", PhoneMode::International));
        assert!(!is_valid_phone("27806995330", PhoneMode::International));
        assert!(!is_valid_phone("7806995330", PhoneMode::International));

        assert_eq!(
            phone_error("780", PhoneMode::Local, false),
            Some("Please enter a valid phone number (10 digits)")
        );
        assert_eq!(
            phone_error("2780", PhoneMode::International, false),
            Some("Please enter a valid international phone number (11 digits)")
        );
        assert_eq!(phone_error("", PhoneMode::Local, false), None);
        assert_eq!(phone_error("7806995330", PhoneMode::Local, true), None);
    }

    #[test]
    fn mode_flags_prefer_local() {
        assert_eq!(PhoneMode::from_flags(true, true), PhoneMode::Local);
        assert_eq!(PhoneMode::from_flags(true, false), PhoneMode::International);
        assert_eq!(PhoneMode::from_flags(false, false), PhoneMode::Local);
        assert_eq!(PhoneMode::International.placeholder(), "+1 (780) 699-5330");
        assert!(is_phone_key("4"));
        assert!(!is_phone_key("("));
    }
}
