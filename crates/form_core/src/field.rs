//! Advisory validation state shared by input widgets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual validation state of a field.
pub enum FieldState {
    /// Neutral.
    #[default]
    Default,
    /// Failed validation or carries an owner-supplied error.
    Error,
    /// Explicitly marked valid by the owner.
    Success,
}

impl FieldState {
    /// Stable token used for `data-ui-state` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// Picks the state to display. An owner error or a failed built-in check wins
/// over whatever state the owner requested.
pub fn resolve_field_state(
    explicit_error: Option<&str>,
    valid: bool,
    requested: FieldState,
) -> FieldState {
    let has_error = explicit_error.is_some_and(|error| !error.is_empty()) || !valid;
    if has_error {
        FieldState::Error
    } else {
        requested
    }
}

/// Chooses the message shown under a field: a built-in validation message when
/// one applies, otherwise the owner's error.
pub fn field_message(
    validation_message: Option<String>,
    explicit_error: Option<String>,
) -> Option<String> {
    validation_message.or(explicit_error)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn failed_validation_overrides_requested_state() {
        assert_eq!(resolve_field_state(None, false, FieldState::Success), FieldState::Error);
        assert_eq!(resolve_field_state(Some("bad"), true, FieldState::Default), FieldState::Error);
    }

    #[test]
    fn valid_field_keeps_requested_state() {
        assert_eq!(resolve_field_state(None, true, FieldState::Success), FieldState::Success);
        assert_eq!(resolve_field_state(Some(""), true, FieldState::Default), FieldState::Default);
    }

    #[test]
    fn built_in_message_takes_priority() {
        assert_eq!(
            field_message(Some("built-in".into()), Some("owner".into())).as_deref(),
            Some("built-in")
        );
        assert_eq!(field_message(None, Some("owner".into())).as_deref(), Some("owner"));
        assert_eq!(field_message(None, None), None);
    }
}
