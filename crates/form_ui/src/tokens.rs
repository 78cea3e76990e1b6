//! Shared `data-ui-*` tokens and small DOM helpers.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

use crate::IconSize;

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Whether the event was dispatched from `container` or one of its descendants.
pub(crate) fn event_within(ev: &web_sys::Event, container: &web_sys::Node) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Field height and type scale.
pub enum FieldSize {
    /// Compact.
    Sm,
    /// Standard.
    #[default]
    Default,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl FieldSize {
    /// Stable token used for `data-ui-size` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Icon size used for adornments inside a field of this size.
    pub const fn icon_size(self) -> IconSize {
        match self {
            Self::Xl => IconSize::Sm,
            _ => IconSize::Xs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Field border treatment.
pub enum FieldVariant {
    /// Thin border.
    #[default]
    Default,
    /// Thick muted border.
    Outline,
    /// Filled background, no border.
    Filled,
    /// Bottom border only.
    Underline,
}

impl FieldVariant {
    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Filled => "filled",
            Self::Underline => "underline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Field corner radius.
pub enum FieldRadius {
    /// Square corners.
    None,
    /// Small radius.
    Sm,
    /// Standard radius.
    #[default]
    Default,
    /// Large radius.
    Lg,
    /// Extra large radius.
    Xl,
    /// Pill.
    Full,
}

impl FieldRadius {
    /// Stable token used for `data-ui-radius` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-field", None), "ui-field");
        assert_eq!(merge_layout_class("ui-field", Some("")), "ui-field");
        assert_eq!(merge_layout_class("ui-field", Some("wide")), "ui-field wide");
    }

    #[test]
    fn adornment_icons_scale_with_the_field() {
        assert_eq!(FieldSize::Sm.icon_size(), IconSize::Xs);
        assert_eq!(FieldSize::Xl.icon_size(), IconSize::Sm);
        assert_eq!(bool_token(true), "true");
    }
}
