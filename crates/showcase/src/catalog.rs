//! Static documentation catalog rendered by the showcase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One documented prop.
pub struct PropDoc {
    /// Prop name as written in `view!`.
    pub name: String,
    /// Rust type accepted by the prop.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the component requires it.
    pub required: bool,
    /// Default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// What the prop does.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Code sample shown next to a live preview.
pub struct ExampleDoc {
    /// Short heading.
    pub title: String,
    /// One sentence on what the sample shows.
    pub description: String,
    /// `view!` snippet.
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Documentation page for one component.
pub struct ComponentDoc {
    /// Route segment, e.g. `input-text`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Navigation group.
    pub category: String,
    /// Summary paragraph.
    pub description: String,
    /// `use` line a consumer needs.
    pub imports: String,
    /// Bullet list of capabilities.
    pub features: Vec<String>,
    /// Props table.
    pub props: Vec<PropDoc>,
    /// Code samples.
    pub examples: Vec<ExampleDoc>,
}

/// Category of every text-like and picker input.
pub const INPUT_CATEGORY: &str = "Input System";
/// Category of tokens and palettes.
pub const DESIGN_CATEGORY: &str = "Design System";
/// Category of the icon registry.
pub const ICONS_CATEGORY: &str = "Icons";
/// Category of actions.
pub const FORMS_CATEGORY: &str = "Forms";
/// Category of floating content.
pub const OVERLAY_CATEGORY: &str = "Overlay";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn prop(name: &str, ty: &str, default: Option<&str>, description: &str) -> PropDoc {
    PropDoc {
        name: name.to_string(),
        ty: ty.to_string(),
        required: false,
        default: default.map(str::to_string),
        description: description.to_string(),
    }
}

fn required_prop(name: &str, ty: &str, description: &str) -> PropDoc {
    PropDoc {
        required: true,
        ..prop(name, ty, None, description)
    }
}

fn example(title: &str, description: &str, code: &str) -> ExampleDoc {
    ExampleDoc {
        title: title.to_string(),
        description: description.to_string(),
        code: code.trim().to_string(),
    }
}

/// Props every input accepts, followed by the value props for `value_ty`.
fn field_props(value_ty: &str) -> Vec<PropDoc> {
    vec![
        prop("label", "MaybeSignal<String>", None, "Label text displayed above the input"),
        prop("description", "MaybeSignal<String>", None, "Helper text under the label"),
        prop("error", "MaybeSignal<String>", None, "Error message; marks the field invalid"),
        prop("required", "bool", Some("false"), "Marks the label with `*` and sets `required`"),
        prop(
            "disabled",
            "MaybeSignal<bool>",
            Some("false"),
            "Disables editing and the clear button",
        ),
        prop(
            "clearable",
            "bool",
            Some("false"),
            "Shows a clear button while the field has a value",
        ),
        prop("size", "FieldSize", Some("FieldSize::Default"), "sm, default, md, lg or xl"),
        prop(
            "variant",
            "FieldVariant",
            Some("FieldVariant::Default"),
            "default, outline, filled or underline",
        ),
        prop(
            "value",
            &format!("MaybeSignal<{value_ty}>"),
            None,
            "Owner-held value; makes the input controlled",
        ),
        prop("default_value", value_ty, None, "Initial value of an uncontrolled input"),
        prop(
            "on_change",
            &format!("Callback<{value_ty}>"),
            None,
            "Called with every committed edit",
        ),
        prop(
            "on_clear",
            &format!("Callback<{value_ty}>"),
            None,
            "Called after the clear button resets the value",
        ),
        prop("on_focus", "Callback<FocusEvent>", None, "Focus handler"),
        prop("on_blur", "Callback<FocusEvent>", None, "Blur handler"),
    ]
}

fn with(mut base: Vec<PropDoc>, extra: Vec<PropDoc>) -> Vec<PropDoc> {
    base.extend(extra);
    base
}

fn icon_props() -> Vec<PropDoc> {
    vec![
        prop("left_icon", "IconName", None, "Icon inside the leading edge"),
        prop("right_icon", "IconName", None, "Icon inside the trailing edge"),
        prop("placeholder", "MaybeSignal<String>", None, "Placeholder text when input is empty"),
    ]
}

fn input_text() -> ComponentDoc {
    ComponentDoc {
        id: "input-text".into(),
        name: "Text Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Basic text input with icons, validation and a clear button.".into(),
        imports: "use form_ui::{IconName, InputText};".into(),
        features: strings(&[
            "Controlled and uncontrolled modes",
            "Left and right icon slots",
            "Five sizes and four style variants",
            "Clearable",
            "Error states and custom validators",
        ]),
        props: with(
            field_props("String"),
            with(
                icon_props(),
                vec![prop("validator", "Callback<String, bool>", None, "Custom validity check")],
            ),
        ),
        examples: vec![
            example(
                "Basic Usage",
                "Uncontrolled input with a label and placeholder.",
                r#"view! { <InputText label="Name" placeholder="Enter your name" /> }"#,
            ),
            example(
                "With Icon",
                "Leading icon and a clear button.",
                r#"
view! {
    <InputText label="Username" left_icon=IconName::User clearable=true />
}"#,
            ),
        ],
    }
}

fn input_password() -> ComponentDoc {
    ComponentDoc {
        id: "input-password".into(),
        name: "Password Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Password input with a visibility toggle.".into(),
        imports: "use form_ui::InputPassword;".into(),
        features: strings(&[
            "Eye button toggles between masked and plain text",
            "Custom validation for password strength",
            "All standard field features",
        ]),
        props: with(
            field_props("String"),
            with(
                icon_props(),
                vec![prop("validator", "Callback<String, bool>", None, "Strength check")],
            ),
        ),
        examples: vec![example(
            "Strength Check",
            "Flags passwords shorter than eight characters.",
            r#"
view! {
    <InputPassword
        label="Password"
        validator=Callback::new(|text: String| text.len() >= 8)
    />
}"#,
        )],
    }
}

fn input_search() -> ComponentDoc {
    ComponentDoc {
        id: "input-search".into(),
        name: "Search Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Search input that reports the query when Enter is pressed.".into(),
        imports: "use form_ui::InputSearch;".into(),
        features: strings(&[
            "`on_search` fires on Enter",
            "Search icon by default",
            "Clear button resets the query",
        ]),
        props: with(
            field_props("String"),
            with(
                icon_props(),
                vec![prop("on_search", "Callback<String>", None, "Called with the query on Enter")],
            ),
        ),
        examples: vec![example(
            "Search on Enter",
            "Logs the submitted query.",
            r#"
view! {
    <InputSearch
        clearable=true
        on_search=Callback::new(|query: String| logging::log!("search {query}"))
    />
}"#,
        )],
    }
}

fn input_hidden() -> ComponentDoc {
    ComponentDoc {
        id: "input-hidden".into(),
        name: "Hidden Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Hidden form value that follows the same controlled rules as visible inputs."
            .into(),
        imports: "use form_ui::InputHidden;".into(),
        features: strings(&["Submits with the surrounding form", "Controlled or uncontrolled"]),
        props: vec![
            prop("name", "String", None, "Form field name"),
            prop("value", "MaybeSignal<String>", None, "Owner-held value"),
            prop("default_value", "String", None, "Initial value"),
            prop("on_change", "Callback<String>", None, "Called when the value changes"),
        ],
        examples: vec![example(
            "Form Token",
            "Carries a fixed value.",
            r#"view! { <InputHidden name="token" default_value="abc123" /> }"#,
        )],
    }
}

fn input_email() -> ComponentDoc {
    ComponentDoc {
        id: "input-email".into(),
        name: "Email Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Email input with built-in address validation.".into(),
        imports: "use form_ui::InputEmail;".into(),
        features: strings(&[
            "Validates `local@domain.tld` addresses",
            "Blocks characters that cannot appear in an address",
            "Mail icon by default",
            "Custom validation rules",
        ]),
        props: with(
            field_props("String"),
            with(
                icon_props(),
                vec![prop(
                    "validator",
                    "Callback<String, bool>",
                    None,
                    "Extra check, e.g. a domain allow list",
                )],
            ),
        ),
        examples: vec![example(
            "Company Domain",
            "Only accepts addresses at example.com.",
            r#"
view! {
    <InputEmail
        label="Work email"
        validator=Callback::new(|text: String| text.ends_with("@example.com"))
    />
}"#,
        )],
    }
}

fn input_url() -> ComponentDoc {
    ComponentDoc {
        id: "input-url".into(),
        name: "URL Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "URL input that accepts http and https addresses.".into(),
        imports: "use form_ui::InputUrl;".into(),
        features: strings(&[
            "Scheme, host and optional path validation",
            "Link icon by default",
            "Custom URL validation rules",
        ]),
        props: with(
            field_props("String"),
            with(
                icon_props(),
                vec![prop("validator", "Callback<String, bool>", None, "Extra check")],
            ),
        ),
        examples: vec![example(
            "Website",
            "Clearable URL field.",
            r#"view! { <InputUrl label="Website" clearable=true /> }"#,
        )],
    }
}

fn input_number() -> ComponentDoc {
    ComponentDoc {
        id: "input-number".into(),
        name: "Number Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Whole-number input with min/max constraints and step controls.".into(),
        imports: "use form_ui::InputNumber;".into(),
        features: strings(&[
            "Integer-only keystroke filter",
            "Min/max validation with range messages",
            "Native step controls",
            "Partial input such as `-` survives until blur",
        ]),
        props: with(
            field_props("Option<i64>"),
            with(
                icon_props(),
                vec![
                    prop("min", "f64", None, "Smallest accepted value"),
                    prop("max", "f64", None, "Largest accepted value"),
                    prop("step", "f64", Some("1.0"), "Native step"),
                    prop("validator", "Callback<i64, bool>", None, "Extra check"),
                ],
            ),
        ),
        examples: vec![example(
            "Quantity",
            "Between 1 and 10.",
            r#"view! { <InputNumber label="Quantity" min=1.0 max=10.0 /> }"#,
        )],
    }
}

fn input_decimal() -> ComponentDoc {
    ComponentDoc {
        id: "input-decimal".into(),
        name: "Decimal Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Decimal number input with precision control.".into(),
        imports: "use form_ui::InputDecimal;".into(),
        features: strings(&[
            "Fraction digits beyond `precision` are cut while typing",
            "Values rounded and padded to `precision` on blur",
            "Min/max validation",
            "Placeholder and step derived from the precision",
        ]),
        props: with(
            field_props("Option<f64>"),
            with(
                icon_props(),
                vec![
                    prop("precision", "u8", Some("2"), "Digits after the decimal point"),
                    prop("min", "f64", None, "Smallest accepted value"),
                    prop("max", "f64", None, "Largest accepted value"),
                    prop("validator", "Callback<f64, bool>", None, "Extra check"),
                ],
            ),
        ),
        examples: vec![example(
            "Price",
            "Two decimal places, never negative.",
            r#"view! { <InputDecimal label="Price ($)" min=0.0 precision=2 /> }"#,
        )],
    }
}

fn input_tel() -> ComponentDoc {
    ComponentDoc {
        id: "input-tel".into(),
        name: "Phone Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Phone input that masks digits while typing.".into(),
        imports: "use form_ui::InputTel;".into(),
        features: strings(&[
            "Local `(780) 699-5330` and international `+1 (780) 699-5330` masks",
            "Reports masked text and bare digits",
            "Edits past the digit cap are ignored",
        ]),
        props: with(
            field_props("String"),
            with(
                icon_props(),
                vec![
                    prop(
                        "international",
                        "bool",
                        Some("false"),
                        "Use the `+1` mask when `local` is off",
                    ),
                    prop("local", "bool", Some("true"), "Use the ten-digit local mask"),
                    prop("validator", "Callback<String, bool>", None, "Receives the bare digits"),
                ],
            ),
        ),
        examples: vec![example(
            "International",
            "Country code prefix.",
            r#"view! { <InputTel label="Phone" international=true local=false /> }"#,
        )],
    }
}

fn input_textarea() -> ComponentDoc {
    ComponentDoc {
        id: "input-textarea".into(),
        name: "Text Area".into(),
        category: INPUT_CATEGORY.into(),
        description: "Multi-line text input.".into(),
        imports: "use form_ui::InputTextArea;".into(),
        features: strings(&["Configurable rows and resize handle", "Max length", "Clearable"]),
        props: with(
            field_props("String"),
            vec![
                prop("rows", "u32", None, "Visible text rows"),
                prop(
                    "resize",
                    "TextAreaResize",
                    Some("TextAreaResize::Vertical"),
                    "none, vertical, horizontal or both",
                ),
                prop("max_length", "usize", None, "Native `maxlength`"),
            ],
        ),
        examples: vec![example(
            "Notes",
            "Six rows.",
            r#"view! { <InputTextArea label="Notes" rows=6 /> }"#,
        )],
    }
}

fn input_date() -> ComponentDoc {
    ComponentDoc {
        id: "input-date".into(),
        name: "Date Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Native date input with a calendar icon.".into(),
        imports: "use form_ui::InputDate;".into(),
        features: strings(&["ISO `YYYY-MM-DD` values", "Min and max dates"]),
        props: with(
            field_props("String"),
            vec![
                prop("min", "String", None, "Earliest selectable date"),
                prop("max", "String", None, "Latest selectable date"),
            ],
        ),
        examples: vec![example(
            "Booking",
            "Dates within 2026.",
            r#"view! { <InputDate label="Check-in" min="2026-01-01" max="2026-12-31" /> }"#,
        )],
    }
}

fn input_range() -> ComponentDoc {
    ComponentDoc {
        id: "input-range".into(),
        name: "Range Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "Range slider with ticks, marks and value display.".into(),
        imports: "use form_ui::InputRange;\nuse form_core::RangeMark;".into(),
        features: strings(&[
            "Min, max and step",
            "Tick marks at a configurable interval",
            "Labelled marks at specific values",
            "Value readout",
            "Horizontal or vertical orientation",
        ]),
        props: with(
            field_props("f64"),
            vec![
                prop("min", "f64", Some("0.0"), "Lower bound"),
                prop("max", "f64", Some("100.0"), "Upper bound"),
                prop("step", "f64", Some("1.0"), "Increment"),
                prop(
                    "show_value",
                    "bool",
                    Some("false"),
                    "Show min, value and max above the track",
                ),
                prop("show_ticks", "bool", Some("false"), "Draw tick marks"),
                prop("tick_step", "f64", None, "Tick spacing; defaults to `step`"),
                prop("marks", "Vec<RangeMark>", None, "Labelled positions"),
                prop(
                    "orientation",
                    "RangeOrientation",
                    Some("RangeOrientation::Horizontal"),
                    "Track direction",
                ),
            ],
        ),
        examples: vec![example(
            "Volume",
            "Ticks every 10 with a readout.",
            r#"
view! {
    <InputRange label="Volume" show_value=true show_ticks=true tick_step=10.0 />
}"#,
        )],
    }
}

fn input_file() -> ComponentDoc {
    ComponentDoc {
        id: "input-file".into(),
        name: "File Input".into(),
        category: INPUT_CATEGORY.into(),
        description: "File picker with drag and drop, previews and size/count/type limits.".into(),
        imports: "use form_ui::InputFile;\nuse form_core::FileValidation;".into(),
        features: strings(&[
            "Drop zone with click-to-browse",
            "Image previews and file type icons",
            "Max size, max count and accepted type checks",
            "Remove individual files",
        ]),
        props: with(
            field_props("Vec<web_sys::File>"),
            vec![
                prop("accept", "String", None, "Native accept filter, e.g. `image/*,.pdf`"),
                prop("multiple", "bool", Some("false"), "Allow several files"),
                prop("validation", "FileValidation", None, "Size, count and type limits"),
                prop("drag_and_drop", "bool", Some("true"), "Enable the drop zone"),
                prop("show_preview", "bool", Some("true"), "Render image thumbnails"),
                prop("preview_size", "PreviewSize", Some("PreviewSize::Md"), "Thumbnail size"),
            ],
        ),
        examples: vec![example(
            "Images",
            "Up to three images of 5 MB each.",
            r#"
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
    />
}"#,
        )],
    }
}

fn input_colorpicker() -> ComponentDoc {
    ComponentDoc {
        id: "input-colorpicker".into(),
        name: "Color Picker".into(),
        category: INPUT_CATEGORY.into(),
        description: "Color picker with several output formats, alpha support and presets.".into(),
        imports: "use form_ui::InputColorPicker;\nuse form_core::ColorFormat;".into(),
        features: strings(&[
            "Accepts hex, rgb, rgba, hsl, hsla and hsv text",
            "Output format selector",
            "Alpha channel with opacity preview",
            "Preset swatches",
            "Closes on outside click",
        ]),
        props: with(
            field_props("String"),
            vec![
                prop("format", "ColorFormat", Some("ColorFormat::Hex"), "Initial output format"),
                prop(
                    "show_alpha",
                    "bool",
                    Some("false"),
                    "Keep alpha and show the opacity preview",
                ),
                prop("show_presets", "bool", Some("true"), "Show the preset grid"),
                prop("preset_colors", "Vec<String>", None, "Replaces the default presets"),
                prop("show_input", "bool", Some("true"), "Show the text field"),
                prop("swatch_size", "FieldSize", Some("FieldSize::Default"), "Trigger swatch size"),
            ],
        ),
        examples: vec![example(
            "RGBA Output",
            "Keeps the alpha channel.",
            r#"
view! {
    <InputColorPicker
        label="Overlay"
        format=ColorFormat::Rgba
        show_alpha=true
        default_value="rgba(59, 130, 246, 0.5)"
    />
}"#,
        )],
    }
}

fn colors() -> ComponentDoc {
    ComponentDoc {
        id: "colors".into(),
        name: "Color System".into(),
        category: DESIGN_CATEGORY.into(),
        description: "Color parsing and conversion shared by the picker and any host code.".into(),
        imports: "use form_core::{parse_color, ColorFormat};".into(),
        features: strings(&[
            "Parses six text formats",
            "Converts between RGB, HSL and HSV",
            "Serializes to any format with or without alpha",
        ]),
        props: vec![
            required_prop("text", "&str", "Color text passed to `parse_color`"),
            prop("format", "ColorFormat", Some("ColorFormat::Hex"), "Target of `format_color`"),
            prop("include_alpha", "bool", Some("false"), "Emit alpha in rgb/hsl output"),
        ],
        examples: vec![example(
            "Convert",
            "Hex to HSL.",
            r##"
if let Some(color) = parse_color("#3b82f6") {
    assert_eq!(format_color(&color, ColorFormat::Hsl, false), "hsl(217, 91%, 60%)");
}"##,
        )],
    }
}

fn icons() -> ComponentDoc {
    ComponentDoc {
        id: "icons".into(),
        name: "Icon Library".into(),
        category: ICONS_CATEGORY.into(),
        description: "Every icon in the registry, searchable and grouped, with copyable snippets."
            .into(),
        imports: "use form_ui::{Icon, IconByToken, IconName, IconSize, IconTone};".into(),
        features: strings(&[
            "One registry drawn on a 24px stroke grid",
            "Seven sizes from 12px to 48px",
            "Nine color tones",
            "Spin for loading indicators",
            "String lookup with a placeholder for unknown tokens",
        ]),
        props: vec![
            required_prop("icon", "IconName", "Registry entry to draw"),
            prop(
                "size",
                "IconSize",
                Some("IconSize::Default"),
                "xs, sm, default, md, lg, xl or 2xl",
            ),
            prop("tone", "IconTone", Some("IconTone::Default"), "Color tone"),
            prop("spin", "bool", Some("false"), "Rotate continuously"),
            prop("layout_class", "&'static str", None, "Extra class for layout"),
        ],
        examples: vec![
            example(
                "Basic Usage",
                "Default size and tone.",
                r#"view! { <Icon icon=IconName::Search /> }"#,
            ),
            example(
                "Sizes and Tones",
                "Larger icons in semantic colors.",
                r#"
view! {
    <Icon icon=IconName::Success size=IconSize::Lg tone=IconTone::Success />
    <Icon icon=IconName::Warning size=IconSize::Lg tone=IconTone::Warning />
    <Icon icon=IconName::Loading spin=true />
}"#,
            ),
            example(
                "By Token",
                "Render from a string such as stored config; unknown tokens show `?`.",
                r#"view! { <IconByToken token="calendar" size=IconSize::Md /> }"#,
            ),
            example(
                "Adding an Icon",
                "Add a variant, list it in `IconName::ALL`, then give it a token and SVG body.",
                r##"
// icon.rs
pub enum IconName {
    // ...
    Rocket,
}

// in IconName::token
Self::Rocket => "rocket",

// in IconName::svg_body
Self::Rocket => r#"<path d="M5 19l4-4m6-10l4 4-9 9-4-4z"/>"#,"##,
            ),
        ],
    }
}

fn button() -> ComponentDoc {
    ComponentDoc {
        id: "button".into(),
        name: "Button".into(),
        category: FORMS_CATEGORY.into(),
        description: "A versatile button with multiple variants and sizes.".into(),
        imports: "use form_ui::{Button, ButtonSize, ButtonVariant};".into(),
        features: strings(&[
            "Variants: default, secondary, destructive, outline, ghost, link",
            "Sizes: sm, default, lg, icon",
            "Loading state with spinner",
            "Leading and trailing icons",
        ]),
        props: vec![
            prop("variant", "ButtonVariant", Some("ButtonVariant::Default"), "Visual style"),
            prop("size", "ButtonSize", Some("ButtonSize::Default"), "Height and padding"),
            prop("disabled", "MaybeSignal<bool>", Some("false"), "Disables the button"),
            prop(
                "loading",
                "MaybeSignal<bool>",
                Some("false"),
                "Shows a spinner and ignores clicks",
            ),
            prop("leading_icon", "IconName", None, "Icon before the label"),
            prop("trailing_icon", "IconName", None, "Icon after the label"),
            prop("button_type", "&'static str", Some("\"button\""), "Native `type`"),
            prop("on_click", "Callback<MouseEvent>", None, "Click handler"),
        ],
        examples: vec![
            example(
                "Basic Usage",
                "Default button.",
                r#"view! { <Button>"Click me"</Button> }"#,
            ),
            example(
                "Button Sizes",
                "Small, default and large.",
                r#"
view! {
    <Button size=ButtonSize::Sm>"Small"</Button>
    <Button>"Default"</Button>
    <Button size=ButtonSize::Lg>"Large"</Button>
}"#,
            ),
            example(
                "All Variants",
                "Every visual style.",
                r#"
view! {
    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
    <Button variant=ButtonVariant::Destructive>"Destructive"</Button>
    <Button variant=ButtonVariant::Outline>"Outline"</Button>
}"#,
            ),
            example(
                "Disabled States",
                "Disabled and loading buttons.",
                r#"
view! {
    <Button disabled=true>"Disabled"</Button>
    <Button loading=true>"Saving"</Button>
}"#,
            ),
        ],
    }
}

fn tooltip() -> ComponentDoc {
    ComponentDoc {
        id: "tooltip".into(),
        name: "Tooltip".into(),
        category: OVERLAY_CATEGORY.into(),
        description: "Tooltip with configurable position, timing and interaction modes.".into(),
        imports: "use form_ui::Tooltip;\nuse form_core::TooltipPosition;".into(),
        features: strings(&[
            "Eight positions",
            "Configurable open delay",
            "Stay-open-until-click mode",
            "Click handler on the content",
            "Five variants and three sizes",
            "Optional arrow",
        ]),
        props: vec![
            required_prop("content", "ViewFn", "Tooltip body"),
            prop("position", "TooltipPosition", Some("TooltipPosition::Top"), "Side and alignment"),
            prop("variant", "TooltipVariant", Some("TooltipVariant::Default"), "Colors"),
            prop("size", "TooltipSize", Some("TooltipSize::Default"), "Padding and type scale"),
            prop("delay_ms", "u32", Some("200"), "Hover delay before opening"),
            prop("stay_open_until_click", "bool", Some("false"), "Keep open until clicked"),
            prop("show_arrow", "bool", Some("true"), "Draw the arrow"),
            prop("disabled", "bool", Some("false"), "Render the trigger only"),
            prop("on_tooltip_click", "Callback<MouseEvent>", None, "Content click handler"),
        ],
        examples: vec![example(
            "Sticky",
            "Stays open until clicked.",
            r#"
view! {
    <Tooltip content=|| "Click me to close" stay_open_until_click=true>
        <Button>"Hover"</Button>
    </Tooltip>
}"#,
        )],
    }
}

/// Every documented component, in navigation order.
pub fn catalog() -> Vec<ComponentDoc> {
    vec![
        input_text(),
        input_password(),
        input_email(),
        input_url(),
        input_search(),
        input_number(),
        input_decimal(),
        input_tel(),
        input_textarea(),
        input_date(),
        input_hidden(),
        input_file(),
        input_colorpicker(),
        input_range(),
        colors(),
        icons(),
        button(),
        tooltip(),
    ]
}

/// Looks up a component page by id.
pub fn find_component(id: &str) -> Option<ComponentDoc> {
    catalog().into_iter().find(|doc| doc.id == id)
}

/// Distinct categories in first-appearance order.
pub fn categories() -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for doc in catalog() {
        if !seen.contains(&doc.category) {
            seen.push(doc.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let docs = catalog();
        let ids: HashSet<&str> = docs.iter().map(|doc| doc.id.as_str()).collect();
        assert_eq!(ids.len(), docs.len());
    }

    #[test]
    fn every_widget_is_documented() {
        for id in [
            "input-text",
            "input-password",
            "input-search",
            "input-hidden",
            "input-email",
            "input-url",
            "input-number",
            "input-decimal",
            "input-tel",
            "input-textarea",
            "input-date",
            "input-range",
            "input-file",
            "input-colorpicker",
            "icons",
            "button",
            "tooltip",
        ] {
            let doc = find_component(id).unwrap_or_else(|| panic!("missing {id}"));
            assert!(!doc.props.is_empty(), "{id} has no props");
            assert!(!doc.examples.is_empty(), "{id} has no examples");
            assert!(!doc.features.is_empty(), "{id} has no features");
        }
    }

    #[test]
    fn categories_keep_navigation_order() {
        assert_eq!(
            categories(),
            vec![
                INPUT_CATEGORY,
                DESIGN_CATEGORY,
                ICONS_CATEGORY,
                FORMS_CATEGORY,
                OVERLAY_CATEGORY
            ]
        );
    }

    #[test]
    fn catalog_survives_json() {
        let docs = catalog();
        let json = serde_json::to_string(&docs).expect("serialize");
        let restored: Vec<ComponentDoc> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, docs);
    }

    #[test]
    fn prop_type_serializes_as_type() {
        let value = serde_json::to_value(prop("size", "FieldSize", None, "Size")).expect("json");
        assert_eq!(value["type"], "FieldSize");
        assert!(value.get("default").is_none());
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(find_component("carousel"), None);
    }
}
