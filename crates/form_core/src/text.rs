//! Email and URL validation plus keystroke filters for text-like inputs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?|ftp)://[^\s/$.?#].[^\s]*$").expect("url regex"));

// Also admits bare domains such as `example.com/docs`.
static URL_WITH_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?(\?[;&a-z\d%_.,~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("url with domain regex")
});

/// Message shown for a malformed email address.
pub const EMAIL_ERROR: &str = "Please enter a valid email address";

/// Message shown for a malformed URL.
pub const URL_ERROR: &str = "Please enter a valid URL";

/// Empty input is valid; presence is the `required` attribute's job.
pub fn is_valid_email(text: &str) -> bool {
    text.is_empty() || EMAIL.is_match(text)
}

/// Accepts scheme-qualified URLs, then falls back to bare domains.
pub fn is_valid_url(text: &str) -> bool {
    text.is_empty() || URL.is_match(text) || URL_WITH_DOMAIN.is_match(text)
}

/// Keystroke filter for email inputs.
pub fn is_email_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '%' | '+' | '-' | '@')
}

/// Keystroke filter for URL inputs.
pub fn is_url_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "._~:/?#[]@!$&'()*+,;=%-".contains(ch)
}

/// Applies a per-character filter to a `keydown` key name. Named keys such as
/// `Shift` are not characters and are rejected.
pub fn key_passes(key: &str, filter: fn(char) -> bool) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if filter(ch))
}

/// Validation message for an email field, if any.
pub fn email_error(text: &str, valid: bool) -> Option<&'static str> {
    (!valid && !text.is_empty()).then_some(EMAIL_ERROR)
}

/// Validation message for a URL field, if any.
pub fn url_error(text: &str, valid: bool) -> Option<&'static str> {
    (!valid && !text.is_empty()).then_some(URL_ERROR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// CSS `resize` behaviour of a textarea.
pub enum TextAreaResize {
    /// Fixed size.
    None,
    /// Height only.
    #[default]
    Vertical,
    /// Width only.
    Horizontal,
    /// Both axes.
    Both,
}

impl TextAreaResize {
    /// CSS value for the `resize` property.
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Both => "both",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn email_acceptance_table() {
        for ok in ["", "a@b.co", "first.last+tag@mail.example.org", "x_y%z@sub-domain.io"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["plain", "a@b", "a@b.c", "@example.com", "a b@example.com", "a@example.c0m"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn url_acceptance_table() {
        for ok in [
            "",
            "https://example.com",
            "HTTP://EXAMPLE.COM/path?q=1",
            "ftp://files.example.org/pub",
            "example.com",
            "www.example.co.uk/docs/page",
            "docs.rs/regex#usage",
        ] {
            assert!(is_valid_url(ok), "{ok}");
        }
        for bad in ["not a url", "https://", "mailto:me@example.com", "localhost", "http://.bad"] {
            assert!(!is_valid_url(bad), "{bad}");
        }
    }

    #[test]
    fn keystroke_filters() {
        assert!(key_passes("a", is_email_char));
        assert!(key_passes("@", is_email_char));
        assert!(!key_passes(" ", is_email_char));
        assert!(!key_passes("!", is_email_char));
        assert!(!key_passes("Shift", is_email_char));

        assert!(key_passes("/", is_url_char));
        assert!(key_passes("?", is_url_char));
        assert!(key_passes("]", is_url_char));
        assert!(!key_passes(" ", is_url_char));
        assert!(!key_passes("<", is_url_char));
    }

    #[test]
    fn messages_only_for_non_empty_invalid_text() {
        assert_eq!(email_error("nope", false), Some(EMAIL_ERROR));
        assert_eq!(email_error("", false), None);
        assert_eq!(url_error("nope", false), Some(URL_ERROR));
        assert_eq!(url_error("https://ok.dev", true), None);
        assert_eq!(TextAreaResize::default().token(), "vertical");
    }
}
