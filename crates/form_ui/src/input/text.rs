//! Free-text widgets: text, password, search, email, URL, date, hidden and
//! textarea.

use form_core::field::{field_message, resolve_field_state, FieldState};
use form_core::numeric::is_control_key;
use form_core::text::{
    email_error, is_email_char, is_url_char, is_valid_email, is_valid_url, key_passes, url_error,
    TextAreaResize,
};
use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::*;

use super::{
    field_id, modifier_held, non_empty, placeholder_or, render_text_box, ClearButton, FieldProps,
    InputWrapper, TextBox,
};
use crate::controllable::use_controllable;
use crate::icon::{Icon, IconName};
use crate::tokens::{bool_token, FieldRadius, FieldSize, FieldVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextKind {
    Text,
    Password,
    Search,
    Email,
    Url,
    Date,
}

impl TextKind {
    const fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Search => "search",
            Self::Email => "email",
            Self::Url => "url",
            Self::Date => "date",
        }
    }

    const fn id_prefix(self) -> &'static str {
        match self {
            Self::Text => "input-text",
            Self::Password => "input-password",
            Self::Search => "input-search",
            Self::Email => "input-email",
            Self::Url => "input-url",
            Self::Date => "input-date",
        }
    }

    const fn default_icon(self) -> Option<IconName> {
        match self {
            Self::Search => Some(IconName::Search),
            Self::Email => Some(IconName::Mail),
            Self::Url => Some(IconName::Link),
            Self::Date => Some(IconName::Calendar),
            Self::Text | Self::Password => None,
        }
    }

    const fn default_placeholder(self) -> &'static str {
        match self {
            Self::Password => "Enter your password",
            Self::Search => "Search...",
            Self::Email => "Enter your email",
            Self::Url => "https://example.com",
            Self::Text | Self::Date => "",
        }
    }

    fn key_filter(self) -> Option<fn(char) -> bool> {
        match self {
            Self::Email => Some(is_email_char),
            Self::Url => Some(is_url_char),
            _ => None,
        }
    }

    fn builtin_valid(self, text: &str) -> bool {
        match self {
            Self::Email => is_valid_email(text),
            Self::Url => is_valid_url(text),
            _ => true,
        }
    }

    fn builtin_message(self, text: &str) -> Option<&'static str> {
        match self {
            Self::Email => email_error(text, is_valid_email(text)),
            Self::Url => url_error(text, is_valid_url(text)),
            _ => None,
        }
    }
}

struct TextSetup {
    kind: TextKind,
    field: FieldProps,
    value: Option<MaybeSignal<String>>,
    default_value: String,
    error: MaybeSignal<String>,
    state: FieldState,
    clearable: bool,
    validator: Option<Callback<String, bool>>,
    on_change: Option<Callback<String>>,
    on_blur: Option<Callback<FocusEvent>>,
    on_clear: Option<Callback<String>>,
    on_search: Option<Callback<String>>,
    min: Option<String>,
    max: Option<String>,
    input_type: Option<Signal<&'static str>>,
    trailing: Option<View>,
}

fn render_text_input(setup: TextSetup) -> impl IntoView {
    let TextSetup {
        kind,
        mut field,
        value,
        default_value,
        error,
        state,
        clearable,
        validator,
        on_change,
        on_blur,
        on_clear,
        on_search,
        min,
        max,
        input_type,
        trailing,
    } = setup;

    let control = use_controllable(value, default_value);
    let edited = create_rw_signal(false);
    let error = Signal::derive(move || error.get());

    // A custom validator only judges the field once there is something to judge.
    let valid = Signal::derive(move || {
        control.current.with(|current| {
            let custom = validator
                .filter(|_| edited.get() || !current.is_empty())
                .map_or(true, |validator| validator.call(current.clone()));
            kind.builtin_valid(current) && custom
        })
    });
    let message = Signal::derive(move || {
        let builtin = control
            .current
            .with(|current| kind.builtin_message(current))
            .map(str::to_string);
        field_message(builtin, non_empty(error.get()))
    });
    let field_state = Signal::derive(move || {
        error.with(|error| resolve_field_state(Some(error.as_str()), valid.get(), state))
    });

    let on_input = Callback::new(move |next: String| {
        edited.set(true);
        control.commit(next, on_change);
    });
    let clear = clearable.then(|| {
        Callback::new(move |()| {
            edited.set(true);
            control.clear(String::new(), on_clear, on_change);
        })
    });
    let key_filter = kind.key_filter();
    let on_keydown = (key_filter.is_some() || on_search.is_some()).then(|| {
        Callback::new(move |ev: KeyboardEvent| {
            let key = ev.key();
            if key == "Enter" {
                if let Some(on_search) = on_search.as_ref() {
                    ev.prevent_default();
                    on_search.call(control.get_untracked());
                }
                return;
            }
            if let Some(filter) = key_filter {
                if !is_control_key(&key, modifier_held(&ev)) && !key_passes(&key, filter) {
                    ev.prevent_default();
                }
            }
        })
    });

    field.placeholder = placeholder_or(field.placeholder, kind.default_placeholder().to_string());
    field.left_icon = field.left_icon.or(kind.default_icon());

    let mut text_box = TextBox {
        message,
        field_state,
        on_keydown,
        on_blur,
        on_clear: clear,
        min,
        max,
        trailing,
        ..TextBox::new(kind.token(), kind.token(), control.current, on_input)
    };
    if let Some(input_type) = input_type {
        text_box.input_type = input_type;
    }
    render_text_box(field, text_box)
}

#[component]
/// Single-line text input.
pub fn InputText(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Owner-held value. Passing it makes the input controlled.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let kind = TextKind::Text;
    render_text_input(TextSetup {
        kind,
        field: FieldProps {
            id: field_id(id, kind.id_prefix()),
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
        },
        value,
        default_value,
        error,
        state,
        clearable,
        validator,
        on_change,
        on_blur,
        on_clear,
        on_search: None,
        min: None,
        max: None,
        input_type: None,
        trailing: None,
    })
}

#[component]
/// Password input with a show/hide toggle.
pub fn InputPassword(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let kind = TextKind::Password;
    let revealed = create_rw_signal(false);
    let icon_size = size.icon_size();
    let toggle = view! {
        <button
            type="button"
            data-ui-slot="reveal"
            aria-pressed=move || bool_token(revealed.get())
            aria-label=move || if revealed.get() { "Hide password" } else { "Show password" }
            on:click=move |_| revealed.update(|revealed| *revealed = !*revealed)
        >
            {move || {
                let icon = if revealed.get() { IconName::EyeOff } else { IconName::Eye };
                view! { <Icon icon size=icon_size /> }
            }}
        </button>
    }
    .into_view();

    render_text_input(TextSetup {
        kind,
        field: FieldProps {
            id: field_id(id, kind.id_prefix()),
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
            right_icon: None,
            layout_class,
            on_focus,
        },
        value,
        default_value,
        error,
        state,
        clearable,
        validator,
        on_change,
        on_blur,
        on_clear,
        on_search: None,
        min: None,
        max: None,
        input_type: Some(Signal::derive(move || {
            if revealed.get() {
                "text"
            } else {
                "password"
            }
        })),
        trailing: Some(toggle),
    })
}

#[component]
/// Search box. Enter calls `on_search` with the current text.
pub fn InputSearch(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let kind = TextKind::Search;
    render_text_input(TextSetup {
        kind,
        field: FieldProps {
            id: field_id(id, kind.id_prefix()),
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
        },
        value,
        default_value,
        error,
        state,
        clearable,
        validator,
        on_change,
        on_blur,
        on_clear,
        on_search,
        min: None,
        max: None,
        input_type: None,
        trailing: None,
    })
}

#[component]
/// Email input. Blocks characters that cannot appear in an address and flags
/// malformed addresses.
pub fn InputEmail(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let kind = TextKind::Email;
    render_text_input(TextSetup {
        kind,
        field: FieldProps {
            id: field_id(id, kind.id_prefix()),
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
        },
        value,
        default_value,
        error,
        state,
        clearable,
        validator,
        on_change,
        on_blur,
        on_clear,
        on_search: None,
        min: None,
        max: None,
        input_type: None,
        trailing: None,
    })
}

#[component]
/// URL input. Accepts scheme-qualified URLs and bare domains.
pub fn InputUrl(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let kind = TextKind::Url;
    render_text_input(TextSetup {
        kind,
        field: FieldProps {
            id: field_id(id, kind.id_prefix()),
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
        },
        value,
        default_value,
        error,
        state,
        clearable,
        validator,
        on_change,
        on_blur,
        on_clear,
        on_search: None,
        min: None,
        max: None,
        input_type: None,
        trailing: None,
    })
}

#[component]
/// Native date picker. Values are `YYYY-MM-DD` strings.
pub fn InputDate(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Earliest selectable date.
    #[prop(optional, into)]
    min: Option<String>,
    /// Latest selectable date.
    #[prop(optional, into)]
    max: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let kind = TextKind::Date;
    render_text_input(TextSetup {
        kind,
        field: FieldProps {
            id: field_id(id, kind.id_prefix()),
            name,
            label,
            description,
            placeholder: MaybeSignal::default(),
            required,
            disabled,
            size,
            variant,
            radius,
            left_icon,
            right_icon: None,
            layout_class,
            on_focus,
        },
        value,
        default_value,
        error,
        state,
        clearable,
        validator,
        on_change,
        on_blur,
        on_clear,
        on_search: None,
        min,
        max,
        input_type: None,
        trailing: None,
    })
}

#[component]
/// Hidden form value. Follows the same controlled/uncontrolled rules as the
/// visible inputs.
pub fn InputHidden(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let control = use_controllable(value, default_value);
    view! {
        <input
            type="hidden"
            id=id
            name=name
            prop:value=move || control.current.get()
            data-ui-primitive="true"
            data-ui-kind="hidden"
            on:change=move |ev| {
                control.commit(event_target_value(&ev), on_change);
            }
        />
    }
}

#[component]
/// Multi-line text input.
pub fn InputTextArea(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Visible text rows.
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)] resize: TextAreaResize,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let id = field_id(id, "input-textarea");
    let control = use_controllable(value, default_value);
    let edited = create_rw_signal(false);
    let error = Signal::derive(move || error.get());
    let valid = Signal::derive(move || {
        validator
            .filter(|_| edited.get())
            .map_or(true, |validator| validator.call(control.current.get()))
    });
    let field_state = Signal::derive(move || {
        error.with(|error| resolve_field_state(Some(error.as_str()), valid.get(), state))
    });
    let show_clear =
        move || clearable && !disabled.get() && !control.current.with(String::is_empty);
    let input_id = id.clone();

    view! {
        <InputWrapper
            label
            description
            error=error
            required
            size
            html_for=input_id
            layout_class=layout_class.unwrap_or("")
        >
            <textarea
                id=id
                name=name
                class="ui-textarea"
                rows=rows
                maxlength=max_length
                placeholder=move || non_empty(placeholder.get())
                required=required
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(field_state.get() == FieldState::Error)
                prop:value=move || control.current.get()
                data-ui-primitive="true"
                data-ui-kind="textarea"
                data-ui-size=size.token()
                data-ui-variant=variant.token()
                data-ui-radius=radius.token()
                data-ui-resize=resize.token()
                data-ui-state=move || field_state.get().token()
                on:input=move |ev| {
                    edited.set(true);
                    control.commit(event_target_value(&ev), on_change);
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
            ></textarea>
            <Show when=show_clear>
                <ClearButton
                    size
                    on_clear=Callback::new(move |_| {
                        edited.set(true);
                        control.clear(String::new(), on_clear, on_change);
                    })
                />
            </Show>
        </InputWrapper>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kinds_pick_their_default_adornments() {
        assert_eq!(TextKind::Email.default_icon(), Some(IconName::Mail));
        assert_eq!(TextKind::Url.default_icon(), Some(IconName::Link));
        assert_eq!(TextKind::Search.default_icon(), Some(IconName::Search));
        assert_eq!(TextKind::Date.default_icon(), Some(IconName::Calendar));
        assert_eq!(TextKind::Text.default_icon(), None);
        assert_eq!(TextKind::Search.default_placeholder(), "Search...");
    }

    #[test]
    fn only_email_and_url_filter_keys() {
        let email = TextKind::Email.key_filter().expect("email filter");
        assert!(key_passes("@", email));
        assert!(!key_passes(" ", email));
        assert!(TextKind::Text.key_filter().is_none());
        assert!(TextKind::Search.key_filter().is_none());
    }

    #[test]
    fn builtin_messages_only_for_filled_invalid_text() {
        assert_eq!(TextKind::Email.builtin_message(""), None);
        assert_eq!(
            TextKind::Email.builtin_message("nope"),
            Some("Please enter a valid email address")
        );
        assert_eq!(TextKind::Url.builtin_message("example.com"), None);
        assert_eq!(TextKind::Text.builtin_message("anything"), None);
        assert!(!TextKind::Url.builtin_valid("not a url"));
    }
}
