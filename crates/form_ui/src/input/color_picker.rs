//! Color field: swatch trigger, free-text entry and a dropdown with presets
//! and an output format selector.

use form_core::color::picker::{
    alpha_gradient, normalize_color_input, same_color, swatch_background, CLEAR_COLOR,
    DEFAULT_PRESETS, SELECTOR_FORMATS,
};
use form_core::field::{field_message, resolve_field_state, FieldState};
use form_core::{parse_color, ColorFormat};
use leptos::ev::FocusEvent;
use leptos::*;

use super::{field_id, non_empty, InputWrapper};
use crate::controllable::use_controllable;
use crate::icon::{Icon, IconName};
use crate::tokens::{bool_token, event_within, FieldRadius, FieldSize, FieldVariant};

const INVALID_COLOR: &str = "Please enter a valid color";

/// Presets that parse, in order. Invalid entries are logged and dropped.
fn usable_presets(presets: Vec<String>) -> Vec<String> {
    presets
        .into_iter()
        .filter(|preset| {
            let usable = parse_color(preset).is_some();
            if !usable {
                logging::warn!("ignoring preset color `{preset}`");
            }
            usable
        })
        .collect()
}

fn draft_error(draft: &str) -> Option<String> {
    (!draft.trim().is_empty() && parse_color(draft).is_none()).then(|| INVALID_COLOR.to_string())
}

#[component]
fn Swatch(
    #[prop(into)] color: Signal<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(into)] aria_label: String,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            data-ui-slot="swatch"
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            aria-label=aria_label
            disabled=move || disabled.get()
            style=move || color.with(|color| format!("background-color: {}", swatch_background(color)))
            on:click=move |_| on_click.call(())
        ></button>
    }
}

#[component]
/// Color input. The committed value is always re-serialized in the selected
/// output format; text that does not parse stays in the field without being
/// committed.
///
/// Clearing resets to `#000000`.
pub fn InputColorPicker(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] clearable: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: FieldSize,
    #[prop(optional)] variant: FieldVariant,
    #[prop(optional)] radius: FieldRadius,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Initial output format. The dropdown can switch it afterwards.
    #[prop(optional)]
    format: ColorFormat,
    /// Keep the alpha channel in the output and show an opacity preview.
    #[prop(optional)]
    show_alpha: bool,
    #[prop(default = true)] show_presets: bool,
    #[prop(optional)] preset_colors: Option<Vec<String>>,
    #[prop(optional)] swatch_size: FieldSize,
    #[prop(default = true)] show_input: bool,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional)] validator: Option<Callback<String, bool>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<String>>,
) -> impl IntoView {
    let control = use_controllable(
        value,
        default_value.unwrap_or_else(|| CLEAR_COLOR.to_string()),
    );
    let selected_format = create_rw_signal(format);
    let open = create_rw_signal(false);
    let draft = create_rw_signal(String::new());
    let root = create_node_ref::<html::Div>();
    let id = field_id(id, "input-color");
    let input_id = id.clone();

    // The text field follows the committed color, rendered in the active format.
    create_effect(move |_| {
        let format = selected_format.get();
        if let Some(text) = control
            .current
            .with(|current| normalize_color_input(current, format, show_alpha))
        {
            draft.set(text);
        }
    });

    let presets = usable_presets(preset_colors.unwrap_or_else(|| {
        DEFAULT_PRESETS.iter().map(|preset| preset.to_string()).collect()
    }));

    let error = Signal::derive(move || error.get());
    let message = Signal::derive(move || {
        field_message(draft.with(|draft| draft_error(draft)), non_empty(error.get()))
            .unwrap_or_default()
    });
    let field_state = Signal::derive(move || {
        let current = control.current.get();
        let valid = parse_color(&current).is_some()
            && validator.map_or(true, |validator| validator.call(current));
        error.with(|error| resolve_field_state(Some(error.as_str()), valid, state))
    });

    let apply = move |text: &str| {
        let active = selected_format.get_untracked();
        if let Some(next) = normalize_color_input(text, active, show_alpha) {
            control.commit(next, on_change);
        }
    };

    let outside_listener = window_event_listener(ev::mousedown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let inside = root
            .get_untracked()
            .is_some_and(|root| event_within(&ev, &root));
        if !inside {
            open.set(false);
        }
    });
    on_cleanup(move || outside_listener.remove());

    let clear = Callback::new(move |_| {
        control.clear(CLEAR_COLOR.to_string(), on_clear, on_change);
    });

    view! {
        <InputWrapper
            label
            description
            error=message
            required
            size
            html_for=input_id
            clearable=Signal::derive(move || clearable && !disabled.get())
            on_clear=clear
            layout_class=layout_class.unwrap_or("")
        >
            <div
                node_ref=root
                class="ui-color-picker"
                data-ui-primitive="true"
                data-ui-kind="color-picker"
                data-ui-size=size.token()
                data-ui-variant=variant.token()
                data-ui-radius=radius.token()
                data-ui-state=move || field_state.get().token()
                data-ui-open=move || bool_token(open.get())
                data-ui-disabled=move || bool_token(disabled.get())
            >
                <Swatch
                    color=control.current
                    size=swatch_size
                    disabled
                    aria_label="Open color picker".to_string()
                    on_click=Callback::new(move |()| {
                        if !disabled.get_untracked() {
                            open.update(|open| *open = !*open);
                        }
                    })
                />
                {show_input.then(|| view! {
                    <input
                        class="ui-input"
                        type="text"
                        id=id
                        name=name
                        required=required
                        disabled=move || disabled.get()
                        aria-invalid=move || bool_token(!message.with(String::is_empty))
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            apply(&text);
                            draft.set(text);
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
                })}
                <Show when=move || open.get() && !disabled.get()>
                    <div data-ui-slot="dropdown" role="dialog" aria-label="Color picker">
                        {show_alpha.then(|| view! {
                            <div data-ui-slot="alpha">
                                <span data-ui-slot="heading">"Opacity"</span>
                                <div
                                    data-ui-slot="alpha-track"
                                    style=move || {
                                        control
                                            .current
                                            .with(|current| parse_color(current))
                                            .map(|color| format!("background: {}", alpha_gradient(&color)))
                                            .unwrap_or_default()
                                    }
                                ></div>
                            </div>
                        })}
                        {(show_presets && !presets.is_empty()).then(|| {
                            let presets = presets.clone();
                            view! {
                                <div data-ui-slot="presets">
                                    <span data-ui-slot="heading">"Presets"</span>
                                    <div data-ui-slot="preset-grid">
                                        {presets
                                            .into_iter()
                                            .map(|preset| {
                                                let swatch = preset.clone();
                                                let label = format!("Use {preset}");
                                                view! {
                                                    <Swatch
                                                        color=Signal::derive(move || swatch.clone())
                                                        size=FieldSize::Sm
                                                        selected=Signal::derive({
                                                            let preset = preset.clone();
                                                            move || control.current.with(|current| same_color(current, &preset))
                                                        })
                                                        aria_label=label
                                                        on_click=Callback::new(move |()| {
                                                            apply(&preset);
                                                            open.set(false);
                                                        })
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })}
                        <div data-ui-slot="formats">
                            <span data-ui-slot="heading">"Format"</span>
                            {SELECTOR_FORMATS
                                .into_iter()
                                .map(|format| view! {
                                    <button
                                        type="button"
                                        data-ui-slot="format"
                                        data-ui-selected=move || bool_token(selected_format.get() == format)
                                        on:click=move |_| {
                                            selected_format.set(format);
                                            apply(&control.get_untracked());
                                        }
                                    >
                                        {format.label()}
                                        {move || (selected_format.get() == format).then(|| view! {
                                            <Icon icon=IconName::Check size=size.icon_size() />
                                        })}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </InputWrapper>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unparseable_presets_are_dropped() {
        let presets = usable_presets(vec![
            "#ff0000".to_string(),
            "not-a-color".to_string(),
            "hsl(120, 100%, 50%)".to_string(),
        ]);
        assert_eq!(presets, vec!["#ff0000".to_string(), "hsl(120, 100%, 50%)".to_string()]);
    }

    #[test]
    fn only_non_empty_garbage_is_reported() {
        assert_eq!(draft_error(""), None);
        assert_eq!(draft_error("#12"), Some(INVALID_COLOR.to_string()));
        assert_eq!(draft_error("rgb(1, 2, 3)"), None);
    }
}
