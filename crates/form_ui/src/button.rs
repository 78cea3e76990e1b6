//! Button primitive.

use leptos::ev::MouseEvent;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::icon::{Icon, IconName, IconSize};
use crate::tokens::{bool_token, merge_layout_class};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual treatment of a [`Button`].
pub enum ButtonVariant {
    /// Primary action.
    #[default]
    Default,
    /// Secondary action.
    Secondary,
    /// Irreversible or dangerous action.
    Destructive,
    /// Bordered, transparent background.
    Outline,
    /// No chrome until hovered.
    Ghost,
    /// Rendered as an underlined text link.
    Link,
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
        Self::Ghost,
        Self::Link,
    ];

    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Height and padding of a [`Button`].
pub enum ButtonSize {
    /// Compact.
    Sm,
    /// Standard.
    #[default]
    Default,
    /// Large.
    Lg,
    /// Square, icon only.
    Icon,
}

impl ButtonSize {
    /// Every size, in declaration order.
    pub const ALL: [Self; 4] = [Self::Sm, Self::Default, Self::Lg, Self::Icon];

    /// Stable token used for `data-ui-size` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    /// Size of icons placed inside the button.
    pub const fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Xs,
            Self::Lg => IconSize::Default,
            Self::Default | Self::Icon => IconSize::Sm,
        }
    }
}

fn button_state(disabled: bool, loading: bool) -> &'static str {
    if loading {
        "loading"
    } else if disabled {
        "disabled"
    } else {
        "idle"
    }
}

#[component]
/// Clickable button. A loading button shows a spinner in place of the leading
/// icon and ignores clicks.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    /// HTML button type. Defaults to `"button"` so buttons never submit by accident.
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    let icon_size = size.icon_size();
    let inert = move || disabled.get() || loading.get();

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            id=id
            aria-label=move || {
                let label = aria_label.get();
                (!label.is_empty()).then_some(label)
            }
            aria-busy=move || bool_token(loading.get())
            title=move || {
                let title = title.get();
                (!title.is_empty()).then_some(title)
            }
            disabled=inert
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || button_state(disabled.get(), loading.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if inert() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || {
                if loading.get() {
                    Some(view! { <Icon icon=IconName::Loading size=icon_size spin=true /> }.into_view())
                } else {
                    leading_icon.map(|icon| view! { <Icon icon size=icon_size /> }.into_view())
                }
            }}
            {children.map(|children| view! { <span data-ui-slot="label">{children()}</span> })}
            {trailing_icon.map(|icon| view! { <Icon icon size=icon_size /> })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loading_wins_over_disabled() {
        assert_eq!(button_state(false, false), "idle");
        assert_eq!(button_state(true, false), "disabled");
        assert_eq!(button_state(true, true), "loading");
    }

    #[test]
    fn variants_deserialize_from_their_tokens() {
        for variant in ButtonVariant::ALL {
            let parsed: ButtonVariant =
                serde_json::from_str(&format!("\"{}\"", variant.token())).expect("deserialize");
            assert_eq!(parsed, variant);
        }
        for size in ButtonSize::ALL {
            let json = serde_json::to_string(&size).expect("serialize");
            assert_eq!(json, format!("\"{}\"", size.token()));
        }
    }

    #[test]
    fn icon_only_buttons_use_the_default_icon_scale() {
        assert_eq!(ButtonSize::Icon.icon_size(), ButtonSize::Default.icon_size());
        assert_eq!(ButtonSize::Lg.icon_size(), IconSize::Default);
    }
}
