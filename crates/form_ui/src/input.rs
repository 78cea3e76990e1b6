//! Field chrome shared by every input widget: the labelled wrapper, adornment
//! icons, the clear button and the text box renderer the text-like widgets use.

pub mod color_picker;
pub mod file;
pub mod numeric;
pub mod range;
pub mod tel;
pub mod text;

use std::sync::atomic::{AtomicUsize, Ordering};

use form_core::FieldState;
use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::icon::{Icon, IconName};
use crate::tokens::{bool_token, merge_layout_class, FieldRadius, FieldSize, FieldVariant};

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(1);

/// Uses the owner's id when given, otherwise mints a unique one.
pub(crate) fn field_id(explicit: Option<String>, prefix: &str) -> String {
    explicit
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("{prefix}-{}", NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed)))
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

/// Falls back to `fallback` while the owner's placeholder is empty.
pub(crate) fn placeholder_or(
    placeholder: MaybeSignal<String>,
    fallback: String,
) -> MaybeSignal<String> {
    if fallback.is_empty() {
        return placeholder;
    }
    Signal::derive(move || {
        let placeholder = placeholder.get();
        if placeholder.is_empty() {
            fallback.clone()
        } else {
            placeholder
        }
    })
    .into()
}

/// Ctrl, Alt and Meta chords always pass keystroke filters.
pub(crate) fn modifier_held(ev: &KeyboardEvent) -> bool {
    ev.ctrl_key() || ev.alt_key() || ev.meta_key()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which edge of the field an adornment sits on.
pub enum IconSide {
    /// Leading edge.
    #[default]
    Left,
    /// Trailing edge.
    Right,
}

impl IconSide {
    /// Stable token used for `data-ui-side` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[component]
/// Label, description and message frame around a field control.
///
/// Empty strings hide the corresponding slot. A required field gets a `*`
/// marker after its label.
pub fn InputWrapper(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] size: FieldSize,
    #[prop(optional, into)] html_for: Option<String>,
    #[prop(optional, into)] clearable: MaybeSignal<bool>,
    #[prop(optional)] on_clear: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let label = Signal::derive(move || label.get());
    let description = Signal::derive(move || description.get());
    let error = Signal::derive(move || error.get());

    view! {
        <div
            class=merge_layout_class("ui-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field"
            data-ui-size=size.token()
            data-ui-invalid=move || bool_token(!error.with(String::is_empty))
        >
            <Show when=move || !label.with(String::is_empty)>
                <label data-ui-slot="label" for=html_for.clone()>
                    {move || label.get()}
                    {required.then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
                </label>
            </Show>
            <Show when=move || !description.with(String::is_empty)>
                <p data-ui-slot="description">{move || description.get()}</p>
            </Show>
            <div data-ui-slot="control">
                {children()}
                {move || {
                    let on_clear = on_clear?;
                    clearable.get().then(|| view! { <ClearButton size on_clear /> })
                }}
            </div>
            <Show when=move || !error.with(String::is_empty)>
                <p data-ui-slot="message" role="alert">{move || error.get()}</p>
            </Show>
        </div>
    }
}

#[component]
/// Icon pinned inside a field. Clickable when `on_click` is set.
pub fn InputIcon(
    icon: IconName,
    #[prop(optional)] side: IconSide,
    #[prop(optional)] size: FieldSize,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let interactive = on_click.is_some();
    view! {
        <span
            data-ui-slot="adornment"
            data-ui-side=side.token()
            data-ui-interactive=bool_token(interactive)
            role=interactive.then_some("button")
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=size.icon_size() />
        </span>
    }
}

#[component]
/// Trailing button that empties a field.
pub fn ClearButton(
    #[prop(optional)] size: FieldSize,
    on_clear: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            data-ui-slot="clear"
            aria-label="Clear"
            on:click=move |ev| on_clear.call(ev)
        >
            <Icon icon=IconName::Close size=size.icon_size() />
        </button>
    }
}

/// Presentation props every text-like widget shares.
pub(crate) struct FieldProps {
    pub id: String,
    pub name: Option<String>,
    pub label: MaybeSignal<String>,
    pub description: MaybeSignal<String>,
    pub placeholder: MaybeSignal<String>,
    pub required: bool,
    pub disabled: MaybeSignal<bool>,
    pub size: FieldSize,
    pub variant: FieldVariant,
    pub radius: FieldRadius,
    pub left_icon: Option<IconName>,
    pub right_icon: Option<IconName>,
    pub layout_class: Option<&'static str>,
    pub on_focus: Option<Callback<FocusEvent>>,
}

/// Behaviour of one rendered text box.
pub(crate) struct TextBox {
    pub kind: &'static str,
    pub input_type: Signal<&'static str>,
    pub input_mode: Option<&'static str>,
    pub display: Signal<String>,
    pub message: Signal<Option<String>>,
    pub field_state: Signal<FieldState>,
    pub on_input: Callback<String>,
    pub on_keydown: Option<Callback<KeyboardEvent>>,
    pub on_blur: Option<Callback<FocusEvent>>,
    /// Present when the field is clearable.
    pub on_clear: Option<Callback<()>>,
    pub max_length: Option<usize>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    /// Extra trailing control, e.g. a visibility toggle.
    pub trailing: Option<View>,
}

impl TextBox {
    /// A box with no validation, adornments or keystroke filtering.
    pub fn new(
        kind: &'static str,
        input_type: &'static str,
        display: Signal<String>,
        on_input: Callback<String>,
    ) -> Self {
        Self {
            kind,
            input_type: Signal::derive(move || input_type),
            input_mode: None,
            display,
            message: Signal::derive(|| None),
            field_state: Signal::derive(|| FieldState::Default),
            on_input,
            on_keydown: None,
            on_blur: None,
            on_clear: None,
            max_length: None,
            min: None,
            max: None,
            step: None,
            trailing: None,
        }
    }
}

/// Renders the wrapper, the `<input>` and its adornments.
pub(crate) fn render_text_box(field: FieldProps, text_box: TextBox) -> impl IntoView {
    let FieldProps {
        id,
        name,
        label,
        description,
        placeholder,
        required,
        disabled,
        size,
        variant,
        radius,
        left_icon,
        right_icon,
        layout_class,
        on_focus,
    } = field;
    let TextBox {
        kind,
        input_type,
        input_mode,
        display,
        message,
        field_state,
        on_input,
        on_keydown,
        on_blur,
        on_clear,
        max_length,
        min,
        max,
        step,
        trailing,
    } = text_box;

    let clearable = on_clear.is_some();
    let has_trailing = right_icon.is_some() || clearable || trailing.is_some();
    let input_id = id.clone();
    let show_clear = Signal::derive(move || {
        clearable && !disabled.get() && !display.with(String::is_empty)
    });

    view! {
        <InputWrapper
            label
            description
            error=Signal::derive(move || message.get().unwrap_or_default())
            required
            size
            html_for=input_id
            layout_class=layout_class.unwrap_or("")
        >
            <input
                id=id
                name=name
                class="ui-input"
                type=move || input_type.get()
                inputmode=input_mode
                placeholder=move || non_empty(placeholder.get())
                required=required
                disabled=move || disabled.get()
                maxlength=max_length
                min=min
                max=max
                step=step
                aria-invalid=move || bool_token(field_state.get() == FieldState::Error)
                prop:value=move || display.get()
                data-ui-primitive="true"
                data-ui-kind=kind
                data-ui-size=size.token()
                data-ui-variant=variant.token()
                data-ui-radius=radius.token()
                data-ui-state=move || field_state.get().token()
                data-ui-leading=bool_token(left_icon.is_some())
                data-ui-trailing=bool_token(has_trailing)
                on:input=move |ev| on_input.call(event_target_value(&ev))
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus.as_ref() {
                        on_focus.call(ev);
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
            />
            {left_icon.map(|icon| view! { <InputIcon icon side=IconSide::Left size /> })}
            {right_icon
                .filter(|_| !clearable)
                .map(|icon| view! { <InputIcon icon side=IconSide::Right size /> })}
            {trailing}
            {move || {
                let on_clear = on_clear?;
                show_clear
                    .get()
                    .then(|| view! { <ClearButton size on_clear=Callback::new(move |_| on_clear.call(())) /> })
            }}
        </InputWrapper>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn explicit_ids_win_and_minted_ids_are_unique() {
        assert_eq!(field_id(Some("email".into()), "input-email"), "email");
        let first = field_id(None, "input-text");
        let second = field_id(Some(String::new()), "input-text");
        assert!(first.starts_with("input-text-"));
        assert!(first != second);
    }

    #[test]
    fn empty_text_is_absent() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("x".into()).as_deref(), Some("x"));
    }
}
