//! Leptos form widget toolkit.
//!
//! Every widget renders the stable `data-ui-*` DOM contract (`data-ui-kind`,
//! `data-ui-size`, `data-ui-state`, ...) and leaves parsing, validation and
//! formatting decisions to `form_core`. Inputs work both controlled, when the
//! owner passes `value`, and uncontrolled, seeded from `default_value`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod controllable;
mod icon;
mod input;
mod tokens;
mod tooltip;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use controllable::{use_controllable, Controllable};
pub use icon::{Icon, IconByToken, IconName, IconSize, IconTone};
pub use input::color_picker::InputColorPicker;
pub use input::file::{file_meta, InputFile};
pub use input::numeric::{InputDecimal, InputNumber};
pub use input::range::InputRange;
pub use input::tel::InputTel;
pub use input::text::{
    InputDate, InputEmail, InputHidden, InputPassword, InputSearch, InputText, InputTextArea,
    InputUrl,
};
pub use input::{ClearButton, IconSide, InputIcon, InputWrapper};
pub use tokens::{FieldRadius, FieldSize, FieldVariant};
pub use tooltip::Tooltip;

/// Convenience imports for crates composing the widget set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, ClearButton, FieldRadius, FieldSize, FieldVariant,
        Icon, IconName, IconSide, IconSize, IconTone, InputColorPicker, InputDate, InputDecimal,
        InputEmail, InputFile, InputHidden, InputIcon, InputNumber, InputPassword, InputRange,
        InputSearch, InputTel, InputText, InputTextArea, InputUrl, InputWrapper, Tooltip,
    };
    pub use form_core::{
        ColorFormat, FieldState, FileValidation, PhoneEdit, RangeMark, RangeOrientation,
        TextAreaResize, TooltipPosition, TooltipSize, TooltipVariant,
    };
}
