//! Headless rules behind the form widget toolkit.
//!
//! Nothing here touches the DOM. Widgets in `form_ui` call these functions to
//! decide what to display, what to accept and what to report to their owners:
//! color parsing and formatting, controlled/uncontrolled value ownership,
//! numeric, phone, email, URL, file and range rules, and tooltip state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color;
pub mod controlled;
pub mod field;
pub mod file;
pub mod numeric;
pub mod phone;
pub mod range;
pub mod text;
pub mod tooltip;

pub use color::{
    format_color, parse_color, Color, ColorFormat, ColorParseError, Hsl, Hsla, Hsv, Rgb, Rgba,
};
pub use controlled::ControlledValue;
pub use field::{resolve_field_state, FieldState};
pub use file::{FileMeta, FileValidation, FileValidationError};
pub use numeric::{DecimalOptions, NumberBounds};
pub use phone::{PhoneEdit, PhoneMode};
pub use range::{RangeMark, RangeOptions, RangeOrientation};
pub use text::TextAreaResize;
pub use tooltip::{TooltipPosition, TooltipSize, TooltipState, TooltipVariant};
