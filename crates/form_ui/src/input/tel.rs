//! Masked phone number input.

use form_core::field::{field_message, resolve_field_state, FieldState};
use form_core::numeric::is_control_key;
use form_core::phone::{
    apply_phone_edit, format_phone, is_phone_key, is_valid_phone, phone_error, unmask,
};
use form_core::{PhoneEdit, PhoneMode};
use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::*;

use super::{
    field_id, modifier_held, non_empty, placeholder_or, render_text_box, FieldProps, TextBox,
};
use crate::controllable::use_controllable;
use crate::icon::IconName;
use crate::tokens::{FieldRadius, FieldSize, FieldVariant};

#[component]
/// Phone input that masks digits as `(780) 699-5330`, or `+1 (780) 699-5330`
/// when `international` is set and `local` is off.
///
/// Edits that would exceed the digit cap are ignored. `on_change` receives both
/// the masked text and the bare digits.
pub fn InputTel(
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
    #[prop(optional)] international: bool,
    #[prop(default = true)] local: bool,
    /// Owner-held number, masked or bare.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    /// Receives the bare digits.
    #[prop(optional)]
    validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<PhoneEdit>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let mode = PhoneMode::from_flags(international, local);
    let control = use_controllable(value, format_phone(&default_value, mode));
    let display = Signal::derive(move || control.current.with(|text| format_phone(text, mode)));
    let digits = Signal::derive(move || display.with(|text| unmask(text)));
    let error = Signal::derive(move || error.get());

    let phone_valid = Signal::derive(move || digits.with(|digits| is_valid_phone(digits, mode)));
    let custom_valid = Signal::derive(move || {
        validator.map_or(true, |validator| validator.call(digits.get()))
    });
    let message = Signal::derive(move || {
        let builtin = digits.with(|digits| phone_error(digits, mode, phone_valid.get()));
        field_message(builtin.map(str::to_string), non_empty(error.get()))
    });
    let field_state = Signal::derive(move || {
        let valid = phone_valid.get() && custom_valid.get();
        error.with(|error| resolve_field_state(Some(error.as_str()), valid, state))
    });

    let on_input = Callback::new(move |raw: String| {
        let Some(edit) = apply_phone_edit(&raw, mode) else {
            // Re-render so the rejected keystroke disappears from the DOM.
            control.commit(control.get_untracked(), None);
            return;
        };
        control.commit(edit.formatted.clone(), None);
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(edit);
        }
    });
    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        let key = ev.key();
        if !is_control_key(&key, modifier_held(&ev)) && !is_phone_key(&key) {
            ev.prevent_default();
        }
    });
    let clear = clearable.then(|| {
        Callback::new(move |()| {
            let emptied = control.clear(String::new(), on_clear, None);
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(PhoneEdit {
                    formatted: emptied,
                    digits: String::new(),
                });
            }
        })
    });

    render_text_box(
        FieldProps {
            id: field_id(id, "input-tel"),
            name,
            label,
            description,
            placeholder: placeholder_or(placeholder, mode.placeholder().to_string()),
            required,
            disabled,
            size,
            variant,
            radius,
            left_icon: left_icon.or(Some(IconName::Phone)),
            right_icon,
            layout_class,
            on_focus,
        },
        TextBox {
            input_mode: Some("tel"),
            message,
            field_state,
            on_keydown: Some(on_keydown),
            on_blur,
            on_clear: clear,
            max_length: Some(mode.placeholder().len()),
            ..TextBox::new("tel", "tel", display, on_input)
        },
    )
}
