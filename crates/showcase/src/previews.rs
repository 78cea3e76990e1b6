//! Live, interactive demos for each catalog page.

use form_core::{format_color, parse_color};
use form_ui::prelude::*;
use leptos::*;

use crate::gallery::{icon_gallery, CopyButton};

#[component]
fn Readout(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! { <p class="showcase-readout" data-ui-slot="readout">{move || text.get()}</p> }
}

fn text_demos() -> View {
    let name = create_rw_signal(String::new());
    view! {
        <InputText label="Name" placeholder="Enter your name" />
        <InputText
            label="Username"
            left_icon=IconName::User
            clearable=true
            value=name
            on_change=Callback::new(move |next| name.set(next))
        />
        <Readout text=Signal::derive(move || format!("value: {:?}", name.get())) />
        <InputText label="Disabled" default_value="read only" disabled=true />
        <InputText label="With error" error="This field is required" required=true />
    }
    .into_view()
}

fn password_demos() -> View {
    view! {
        <InputPassword
            label="Password"
            description="At least eight characters"
            validator=Callback::new(|text: String| text.len() >= 8)
            clearable=true
        />
    }
    .into_view()
}

fn search_demos() -> View {
    let submitted = create_rw_signal(String::new());
    view! {
        <InputSearch
            clearable=true
            on_search=Callback::new(move |query| submitted.set(query))
        />
        <Readout text=Signal::derive(move || format!("last search: {}", submitted.get())) />
    }
    .into_view()
}

fn hidden_demos() -> View {
    view! {
        <form class="showcase-form">
            <InputHidden name="token" default_value="abc123" />
            <p>"A hidden `token` field is part of this form."</p>
        </form>
    }
    .into_view()
}

fn email_demos() -> View {
    view! {
        <InputEmail label="Email" clearable=true />
        <InputEmail
            label="Work email"
            description="Only example.com addresses"
            validator=Callback::new(|text: String| text.ends_with("@example.com"))
        />
    }
    .into_view()
}

fn url_demos() -> View {
    view! { <InputUrl label="Website" clearable=true /> }.into_view()
}

fn number_demos() -> View {
    let quantity = create_rw_signal(Some(1_i64));
    view! {
        <InputNumber
            label="Quantity"
            min=1.0
            max=10.0
            clearable=true
            value=quantity
            on_change=Callback::new(move |next| quantity.set(next))
        />
        <Readout text=Signal::derive(move || format!("value: {:?}", quantity.get())) />
    }
    .into_view()
}

fn decimal_demos() -> View {
    let price = create_rw_signal(None::<f64>);
    view! {
        <InputDecimal
            label="Price ($)"
            min=0.0
            precision=2
            variant=FieldVariant::Filled
            value=price
            on_change=Callback::new(move |next| price.set(next))
        />
        <Readout text=Signal::derive(move || format!("value: {:?}", price.get())) />
        <InputDecimal label="Weight (kg)" precision=1 min=0.0 max=500.0 clearable=true />
        <InputDecimal
            label="Temperature (\u{b0}C)"
            precision=1
            min={-50.0}
            max=50.0
            variant=FieldVariant::Outline
        />
    }
    .into_view()
}

fn tel_demos() -> View {
    let digits = create_rw_signal(String::new());
    view! {
        <InputTel
            label="Phone"
            clearable=true
            on_change=Callback::new(move |edit: PhoneEdit| digits.set(edit.digits))
        />
        <Readout text=Signal::derive(move || format!("digits: {}", digits.get())) />
        <InputTel label="International" international=true local=false />
    }
    .into_view()
}

fn textarea_demos() -> View {
    view! {
        <InputTextArea label="Notes" rows=6 clearable=true />
        <InputTextArea label="Bio" max_length=160 resize=TextAreaResize::None />
    }
    .into_view()
}

fn date_demos() -> View {
    view! { <InputDate label="Check-in" min="2026-01-01" max="2026-12-31" clearable=true /> }
        .into_view()
}

fn range_demos() -> View {
    let volume = create_rw_signal(40.0);
    view! {
        <InputRange
            label="Volume"
            show_value=true
            show_ticks=true
            tick_step=10.0
            clearable=true
            value=volume
            on_change=Callback::new(move |next| volume.set(next))
        />
        <InputRange
            label="Quality"
            min=0.0
            max=4.0
            marks=vec![
                RangeMark::labelled(0.0, "Low"),
                RangeMark::labelled(2.0, "Medium"),
                RangeMark::labelled(4.0, "High"),
            ]
        />
        <InputRange label="Level" orientation=RangeOrientation::Vertical fill_color="#22c55e" />
    }
    .into_view()
}

fn file_demos() -> View {
    let count = create_rw_signal(0_usize);
    view! {
        <InputFile
            label="Photos"
            multiple=true
            accept="image/*"
            validation=FileValidation {
                max_size: Some(5 * 1024 * 1024),
                max_files: Some(3),
                ..FileValidation::default()
            }
            on_change=Callback::new(move |files: Vec<web_sys::File>| count.set(files.len()))
        />
        <Readout text=Signal::derive(move || format!("selected: {}", count.get())) />
    }
    .into_view()
}

fn color_picker_demos() -> View {
    let brand = create_rw_signal("#3b82f6".to_string());
    view! {
        <InputColorPicker
            label="Brand color"
            value=brand
            on_change=Callback::new(move |next| brand.set(next))
        />
        <Readout text=Signal::derive(move || format!("value: {}", brand.get())) />
        <InputColorPicker
            label="Overlay"
            format=ColorFormat::Rgba
            show_alpha=true
            default_value="rgba(59, 130, 246, 0.5)"
        />
    }
    .into_view()
}

fn color_system_demos() -> View {
    let text = create_rw_signal("#3b82f6".to_string());
    view! {
        <InputText
            label="Color text"
            value=text
            on_change=Callback::new(move |next| text.set(next))
        />
        <table class="showcase-table">
            <tbody>
                {move || {
                    let Some(color) = parse_color(&text.get()) else {
                        return view! { <tr><td>"Not a color"</td></tr> }.into_view();
                    };
                    ColorFormat::ALL
                        .into_iter()
                        .map(|format| {
                            let text = format_color(&color, format, format.has_alpha());
                            view! {
                                <tr>
                                    <th scope="row">{format.label()}</th>
                                    <td><code>{text.clone()}</code></td>
                                    <td><CopyButton text /></td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
    .into_view()
}

fn button_demos() -> View {
    let clicks = create_rw_signal(0_u32);
    let saving = create_rw_signal(false);
    view! {
        <div class="showcase-row">
            {ButtonVariant::ALL
                .into_iter()
                .map(|variant| view! { <Button variant>{variant.token()}</Button> })
                .collect_view()}
        </div>
        <div class="showcase-row">
            <Button size=ButtonSize::Sm>"Small"</Button>
            <Button>"Default"</Button>
            <Button size=ButtonSize::Lg>"Large"</Button>
            <Button size=ButtonSize::Icon aria_label="Settings" leading_icon=IconName::Settings />
        </div>
        <div class="showcase-row">
            <Button
                leading_icon=IconName::Plus
                on_click=Callback::new(move |_| clicks.update(|clicks| *clicks += 1))
            >
                "Count"
            </Button>
            <Button
                variant=ButtonVariant::Secondary
                loading=saving
                on_click=Callback::new(move |_| saving.set(true))
            >
                "Save"
            </Button>
            <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| saving.set(false))>
                "Reset"
            </Button>
            <Button disabled=true>"Disabled"</Button>
        </div>
        <Readout text=Signal::derive(move || format!("clicks: {}", clicks.get())) />
    }
    .into_view()
}

fn tooltip_demos() -> View {
    let content_clicks = create_rw_signal(0_u32);
    view! {
        <div class="showcase-row">
            {TooltipPosition::ALL
                .into_iter()
                .map(|position| view! {
                    <Tooltip content=move || format!("Tooltip on {}", position.token()) position>
                        <Button variant=ButtonVariant::Outline>{position.token()}</Button>
                    </Tooltip>
                })
                .collect_view()}
        </div>
        <div class="showcase-row">
            <Tooltip
                content=|| "Click me to close"
                stay_open_until_click=true
                variant=TooltipVariant::Accent
                on_tooltip_click=Callback::new(move |_| content_clicks.update(|clicks| *clicks += 1))
            >
                <Button>"Sticky"</Button>
            </Tooltip>
            <Tooltip content=|| "Instant" delay_ms=0 size=TooltipSize::Sm show_arrow=false>
                <Button variant=ButtonVariant::Secondary>"No delay"</Button>
            </Tooltip>
            <Tooltip content=|| "Never shown" disabled=true>
                <Button variant=ButtonVariant::Ghost>"Disabled"</Button>
            </Tooltip>
        </div>
        <Readout text=Signal::derive(move || format!("content clicks: {}", content_clicks.get())) />
    }
    .into_view()
}

/// Interactive demo for a catalog page; `None` for unknown ids.
pub fn live_preview(id: &str) -> Option<View> {
    let demos = match id {
        "input-text" => text_demos(),
        "input-password" => password_demos(),
        "input-search" => search_demos(),
        "input-hidden" => hidden_demos(),
        "input-email" => email_demos(),
        "input-url" => url_demos(),
        "input-number" => number_demos(),
        "input-decimal" => decimal_demos(),
        "input-tel" => tel_demos(),
        "input-textarea" => textarea_demos(),
        "input-date" => date_demos(),
        "input-range" => range_demos(),
        "input-file" => file_demos(),
        "input-colorpicker" => color_picker_demos(),
        "colors" => color_system_demos(),
        "button" => button_demos(),
        "tooltip" => tooltip_demos(),
        "icons" => icon_gallery(),
        _ => return None,
    };
    Some(demos)
}
