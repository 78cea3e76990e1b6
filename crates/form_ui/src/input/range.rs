//! Slider input with an optional value readout, ticks and labelled marks.

use form_core::field::{resolve_field_state, FieldState};
use form_core::range::parse_range_input;
use form_core::{RangeMark, RangeOptions, RangeOrientation};
use leptos::ev::FocusEvent;
use leptos::*;

use super::{field_id, InputWrapper};
use crate::controllable::use_controllable;
use crate::tokens::{bool_token, FieldSize};

fn custom_properties(
    percentage: f64,
    track_color: Option<&str>,
    thumb_color: Option<&str>,
    fill_color: Option<&str>,
) -> String {
    let mut style = format!("--ui-range-progress: {percentage}%;");
    for (property, color) in [
        ("--ui-range-track", track_color),
        ("--ui-range-thumb", thumb_color),
        ("--ui-range-fill", fill_color),
    ] {
        if let Some(color) = color {
            style.push_str(&format!(" {property}: {color};"));
        }
    }
    style
}

#[component]
/// Native slider over `[min, max]`.
///
/// Clearing restores `min`; the clear button only appears once the value has
/// moved away from it.
pub fn InputRange(
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] clearable: bool,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = FieldSize::Md)] size: FieldSize,
    #[prop(optional)] state: FieldState,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    /// Show `min`, the current value and `max` above the track.
    #[prop(optional)]
    show_value: bool,
    #[prop(optional)] show_ticks: bool,
    /// Tick spacing; defaults to `step`.
    #[prop(optional)]
    tick_step: Option<f64>,
    #[prop(optional)] marks: Vec<RangeMark>,
    #[prop(optional)] orientation: RangeOrientation,
    #[prop(optional, into)] track_color: Option<String>,
    #[prop(optional, into)] thumb_color: Option<String>,
    #[prop(optional, into)] fill_color: Option<String>,
    #[prop(optional, into)] value: Option<MaybeSignal<f64>>,
    #[prop(optional)] default_value: Option<f64>,
    #[prop(optional)] validator: Option<Callback<f64, bool>>,
    #[prop(optional)] on_change: Option<Callback<f64>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_clear: Option<Callback<f64>>,
) -> impl IntoView {
    let options = RangeOptions { min, max, step };
    let control = use_controllable(value, options.initial_value(default_value));
    let focused = create_rw_signal(false);
    let id = field_id(id, "input-range");
    let input_id = id.clone();
    let error = Signal::derive(move || error.get());
    let field_state = Signal::derive(move || {
        let valid = validator.map_or(true, |validator| validator.call(control.current.get()));
        error.with(|error| resolve_field_state(Some(error.as_str()), valid, state))
    });

    let percentage = Signal::derive(move || options.percentage(control.current.get()));
    let style = move || {
        custom_properties(
            percentage.get(),
            track_color.as_deref(),
            thumb_color.as_deref(),
            fill_color.as_deref(),
        )
    };
    let fill_style = move || {
        format!(
            "{}: {}%",
            orientation.extent_property(),
            percentage.get()
        )
    };
    let ticks = show_ticks.then(|| options.ticks(tick_step)).unwrap_or_default();

    view! {
        <InputWrapper
            label
            description
            error=error
            required
            size
            html_for=input_id
            clearable=Signal::derive(move || {
                clearable && !disabled.get() && options.can_clear(control.current.get())
            })
            on_clear=Callback::new(move |_| {
                control.clear(options.clear_value(), on_clear, on_change);
            })
            layout_class=layout_class.unwrap_or("")
        >
            <div
                class="ui-range"
                data-ui-primitive="true"
                data-ui-kind="range"
                data-ui-size=size.token()
                data-ui-orientation=orientation.token()
                data-ui-state=move || field_state.get().token()
                data-ui-focused=move || bool_token(focused.get())
                data-ui-disabled=move || bool_token(disabled.get())
            >
                {show_value.then(|| view! {
                    <div data-ui-slot="readout">
                        <span>{min}</span>
                        <span data-ui-slot="value">{move || control.current.get()}</span>
                        <span>{max}</span>
                    </div>
                })}
                <div data-ui-slot="track">
                    <div data-ui-slot="fill" aria-hidden="true" style=fill_style></div>
                    <input
                        type="range"
                        id=id
                        name=name
                        min=min
                        max=max
                        step=step
                        required=required
                        disabled=move || disabled.get()
                        style=style
                        aria-orientation=orientation.token()
                        prop:value=move || control.current.get().to_string()
                        on:input=move |ev| {
                            let next = parse_range_input(&event_target_value(&ev), control.get_untracked());
                            control.commit(next, on_change);
                        }
                        on:focus=move |ev| {
                            focused.set(true);
                            if let Some(on_focus) = on_focus.as_ref() {
                                on_focus.call(ev);
                            }
                        }
                        on:blur=move |ev| {
                            focused.set(false);
                            if let Some(on_blur) = on_blur.as_ref() {
                                on_blur.call(ev);
                            }
                        }
                    />
                    {(!ticks.is_empty()).then(|| view! {
                        <div data-ui-slot="ticks" aria-hidden="true">
                            {ticks
                                .iter()
                                .map(|(_, percent)| {
                                    let style = format!("{}: {percent}%", orientation.offset_property());
                                    view! { <span data-ui-slot="tick" style=style></span> }
                                })
                                .collect_view()}
                        </div>
                    })}
                    {(!marks.is_empty()).then(|| view! {
                        <div data-ui-slot="marks">
                            {marks
                                .iter()
                                .map(|mark| {
                                    let style = format!(
                                        "{}: {}%",
                                        orientation.offset_property(),
                                        options.percentage(mark.value)
                                    );
                                    view! { <span data-ui-slot="mark" style=style>{mark.text()}</span> }
                                })
                                .collect_view()}
                        </div>
                    })}
                </div>
            </div>
        </InputWrapper>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_supplied_colors_become_custom_properties() {
        assert_eq!(
            custom_properties(25.0, None, Some("#fff"), None),
            "--ui-range-progress: 25%; --ui-range-thumb: #fff;"
        );
        assert_eq!(
            custom_properties(0.0, None, None, None),
            "--ui-range-progress: 0%;"
        );
    }
}
