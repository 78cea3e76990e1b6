//! Integer and fixed-precision decimal inputs.
//!
//! Both keep the typed text in a draft separate from the committed number so
//! partial input such as `-` or `12.` survives until blur.

use form_core::field::{field_message, resolve_field_state, FieldState};
use form_core::numeric::{
    decimal_placeholder, decimal_step, format_decimal, is_control_key, is_decimal_key,
    is_integer_key, parse_decimal_input, parse_integer_input, range_error, resync_decimal_draft,
    resync_integer_draft, truncate_decimal_input, validate_number, NumberBounds,
};
use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::*;

use super::{
    field_id, modifier_held, non_empty, placeholder_or, render_text_box, FieldProps, TextBox,
};
use crate::controllable::{use_controllable, Controllable};
use crate::icon::IconName;
use crate::tokens::{FieldRadius, FieldSize, FieldVariant};

/// Validity, message and display state for a numeric field.
fn numeric_feedback(
    current: Signal<Option<f64>>,
    bounds: NumberBounds,
    required: bool,
    custom_valid: Signal<bool>,
    state: FieldState,
    error: MaybeSignal<String>,
) -> (Signal<Option<String>>, Signal<FieldState>) {
    let error = Signal::derive(move || error.get());
    let in_bounds = Signal::derive(move || validate_number(current.get(), &bounds, required));
    let message = Signal::derive(move || {
        field_message(
            range_error(current.get(), in_bounds.get(), &bounds),
            non_empty(error.get()),
        )
    });
    let field_state = Signal::derive(move || {
        let valid = in_bounds.get() && custom_valid.get();
        error.with(|error| resolve_field_state(Some(error.as_str()), valid, state))
    });
    (message, field_state)
}

/// Follows a controlled owner's value into `draft`, leaving text that already
/// parses to that value untouched.
fn follow_owner<T>(
    current: Signal<T>,
    draft: RwSignal<String>,
    resync: impl Fn(&str, T) -> Option<String> + 'static,
) where
    T: Clone + 'static,
{
    create_effect(move |_| {
        let value = current.get();
        if let Some(text) = draft.with_untracked(|draft| resync(draft, value)) {
            draft.set(text);
        }
    });
}

/// Keystroke path of [`InputDecimal`]: extra fraction digits are cut from the
/// text, which becomes the draft, and the rounded number is committed.
fn apply_decimal_input(
    raw: &str,
    precision: u8,
    draft: RwSignal<String>,
    control: Controllable<Option<f64>>,
    on_change: Option<Callback<Option<f64>>>,
) {
    let text = truncate_decimal_input(raw, precision);
    let parsed = parse_decimal_input(&text, precision);
    draft.set(text);
    control.commit(parsed, on_change);
}

#[component]
/// Whole-number input. Non-numeric keystrokes are blocked and the value is
/// checked against `min`/`max`.
pub fn InputNumber(
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
    #[prop(optional)] min: Option<f64>,
    #[prop(optional)] max: Option<f64>,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] value: Option<MaybeSignal<Option<i64>>>,
    #[prop(optional)] default_value: Option<i64>,
    #[prop(optional)] validator: Option<Callback<i64, bool>>,
    #[prop(optional)] on_change: Option<Callback<Option<i64>>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<Option<i64>>>,
) -> impl IntoView {
    let control = use_controllable(value, default_value);
    let draft = create_rw_signal(default_value.map(|value| value.to_string()).unwrap_or_default());
    if control.is_controlled() {
        follow_owner(control.current, draft, resync_integer_draft);
    }

    let bounds = NumberBounds { min, max };
    let as_float = Signal::derive(move || control.current.get().map(|value| value as f64));
    let custom_valid = Signal::derive(move || match (validator, control.current.get()) {
        (Some(validator), Some(value)) => validator.call(value),
        _ => true,
    });
    let (message, field_state) =
        numeric_feedback(as_float, bounds, required, custom_valid, state, error);

    let on_input = Callback::new(move |text: String| {
        let parsed = parse_integer_input(&text);
        draft.set(text);
        control.commit(parsed, on_change);
    });
    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        let key = ev.key();
        if !is_control_key(&key, modifier_held(&ev)) && !is_integer_key(&key) {
            ev.prevent_default();
        }
    });
    let blur = Callback::new(move |ev: FocusEvent| {
        draft.set(
            control
                .get_untracked()
                .map(|value| value.to_string())
                .unwrap_or_default(),
        );
        if let Some(on_blur) = on_blur.as_ref() {
            on_blur.call(ev);
        }
    });
    let clear = clearable.then(|| {
        Callback::new(move |()| {
            draft.set(String::new());
            control.clear(None, on_clear, on_change);
        })
    });

    render_text_box(
        FieldProps {
            id: field_id(id, "input-number"),
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
        TextBox {
            input_mode: Some("numeric"),
            message,
            field_state,
            on_keydown: Some(on_keydown),
            on_blur: Some(blur),
            on_clear: clear,
            min: min.map(|min| min.to_string()),
            max: max.map(|max| max.to_string()),
            step: Some(step.to_string()),
            ..TextBox::new("number", "number", draft.into(), on_input)
        },
    )
}

#[component]
/// Decimal input with a fixed number of fraction digits.
///
/// Extra fraction digits are cut from the text while typing; the committed
/// value is rounded to `precision` and re-rendered with exactly `precision`
/// places on blur.
pub fn InputDecimal(
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
    /// Digits kept after the decimal point.
    #[prop(default = 2)]
    precision: u8,
    #[prop(optional)] min: Option<f64>,
    #[prop(optional)] max: Option<f64>,
    #[prop(optional, into)] value: Option<MaybeSignal<Option<f64>>>,
    #[prop(optional)] default_value: Option<f64>,
    #[prop(optional)] validator: Option<Callback<f64, bool>>,
    #[prop(optional)] on_change: Option<Callback<Option<f64>>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<Option<f64>>>,
) -> impl IntoView {
    let control = use_controllable(value, default_value);
    let draft = create_rw_signal(
        default_value
            .map(|value| format_decimal(value, precision))
            .unwrap_or_default(),
    );
    if control.is_controlled() {
        follow_owner(control.current, draft, move |draft, value| {
            resync_decimal_draft(draft, value, precision)
        });
    }

    let bounds = NumberBounds { min, max };
    let custom_valid = Signal::derive(move || match (validator, control.current.get()) {
        (Some(validator), Some(value)) => validator.call(value),
        _ => true,
    });
    let (message, field_state) =
        numeric_feedback(control.current, bounds, required, custom_valid, state, error);

    let on_input = Callback::new(move |raw: String| {
        apply_decimal_input(&raw, precision, draft, control, on_change);
    });
    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        let key = ev.key();
        if is_control_key(&key, modifier_held(&ev)) {
            return;
        }
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let text = draft.get_untracked();
        // Number inputs do not expose a caret, so an empty field counts as the start.
        let caret_at_start = text.is_empty() || matches!(input.selection_start(), Ok(Some(0)));
        if !is_decimal_key(&key, &text, caret_at_start) {
            ev.prevent_default();
        }
    });
    let blur = Callback::new(move |ev: FocusEvent| {
        match control.get_untracked() {
            Some(value) => draft.set(format_decimal(value, precision)),
            None => {
                if draft.with_untracked(|text| parse_decimal_input(text, precision).is_none()) {
                    draft.set(String::new());
                }
            }
        }
        if let Some(on_blur) = on_blur.as_ref() {
            on_blur.call(ev);
        }
    });
    let clear = clearable.then(|| {
        Callback::new(move |()| {
            draft.set(String::new());
            control.clear(None, on_clear, on_change);
        })
    });

    render_text_box(
        FieldProps {
            id: field_id(id, "input-decimal"),
            name,
            label,
            description,
            placeholder: placeholder_or(placeholder, decimal_placeholder(precision)),
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
        TextBox {
            input_mode: Some("decimal"),
            message,
            field_state,
            on_keydown: Some(on_keydown),
            on_blur: Some(blur),
            on_clear: clear,
            min: min.map(|min| min.to_string()),
            max: max.map(|max| max.to_string()),
            step: Some(decimal_step(precision).to_string()),
            ..TextBox::new("decimal", "number", draft.into(), on_input)
        },
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn controlled_decimal_keeps_typed_text_while_owner_echoes() {
        let runtime = create_runtime();

        let owner = create_rw_signal(None::<f64>);
        let control = use_controllable(Some(owner.into()), None);
        let draft = create_rw_signal(String::new());
        follow_owner(control.current, draft, |draft, value| {
            resync_decimal_draft(draft, value, 2)
        });
        let on_change = Some(Callback::new(move |next| owner.set(next)));

        apply_decimal_input("1", 2, draft, control, on_change);
        assert_eq!(owner.get_untracked(), Some(1.0));
        assert_eq!(draft.get_untracked(), "1");

        apply_decimal_input("12", 2, draft, control, on_change);
        assert_eq!(owner.get_untracked(), Some(12.0));
        assert_eq!(draft.get_untracked(), "12");

        apply_decimal_input("12.345", 2, draft, control, on_change);
        assert_eq!(draft.get_untracked(), "12.34");
        assert_eq!(owner.get_untracked(), Some(12.34));

        owner.set(Some(3.5));
        assert_eq!(draft.get_untracked(), "3.50");
        owner.set(None);
        assert_eq!(draft.get_untracked(), "");

        runtime.dispose();
    }

    #[test]
    fn controlled_integer_keeps_a_lone_minus() {
        let runtime = create_runtime();

        let owner = create_rw_signal(Some(4_i64));
        let control = use_controllable(Some(owner.into()), None);
        let draft = create_rw_signal("4".to_string());
        follow_owner(control.current, draft, resync_integer_draft);

        draft.set("-".to_string());
        control.commit(None, Some(Callback::new(move |next| owner.set(next))));
        assert_eq!(owner.get_untracked(), None);
        assert_eq!(draft.get_untracked(), "-");

        runtime.dispose();
    }
}
