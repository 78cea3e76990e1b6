//! Tooltip placement and the "stay open until click" state machine.

use serde::{Deserialize, Serialize};

/// Hover delay before a tooltip opens, in milliseconds.
pub const DEFAULT_DELAY_MS: u32 = 200;

/// Gap between trigger and tooltip, in pixels.
pub const DEFAULT_SIDE_OFFSET: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Where a tooltip sits relative to its trigger.
pub enum TooltipPosition {
    /// Above, centered.
    #[default]
    Top,
    /// Below, centered.
    Bottom,
    /// Left, centered.
    Left,
    /// Right, centered.
    Right,
    /// Above, aligned to the start edge.
    TopStart,
    /// Above, aligned to the end edge.
    TopEnd,
    /// Below, aligned to the start edge.
    BottomStart,
    /// Below, aligned to the end edge.
    BottomEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Side of the trigger the tooltip is placed on.
pub enum TooltipSide {
    /// Above.
    Top,
    /// Below.
    Bottom,
    /// Left.
    Left,
    /// Right.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Alignment along the chosen side.
pub enum TooltipAlign {
    /// Start edge.
    Start,
    /// Centered.
    Center,
    /// End edge.
    End,
}

impl TooltipPosition {
    /// Every position, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopStart,
        Self::TopEnd,
        Self::BottomStart,
        Self::BottomEnd,
    ];

    /// Stable token used for `data-ui-position` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
        }
    }

    /// Splits the position into side and alignment.
    pub const fn placement(self) -> (TooltipSide, TooltipAlign) {
        match self {
            Self::Top => (TooltipSide::Top, TooltipAlign::Center),
            Self::Bottom => (TooltipSide::Bottom, TooltipAlign::Center),
            Self::Left => (TooltipSide::Left, TooltipAlign::Center),
            Self::Right => (TooltipSide::Right, TooltipAlign::Center),
            Self::TopStart => (TooltipSide::Top, TooltipAlign::Start),
            Self::TopEnd => (TooltipSide::Top, TooltipAlign::End),
            Self::BottomStart => (TooltipSide::Bottom, TooltipAlign::Start),
            Self::BottomEnd => (TooltipSide::Bottom, TooltipAlign::End),
        }
    }
}

impl TooltipSide {
    /// Stable token used for `data-ui-side` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl TooltipAlign {
    /// Stable token used for `data-ui-align` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Tooltip color scheme.
pub enum TooltipVariant {
    /// Primary surface.
    #[default]
    Default,
    /// Secondary surface with border.
    Secondary,
    /// Dark surface.
    Dark,
    /// Light surface with border.
    Light,
    /// Accent surface.
    Accent,
}

impl TooltipVariant {
    /// Stable token used for `data-ui-variant` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Accent => "accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Tooltip padding and type scale.
pub enum TooltipSize {
    /// Compact.
    Sm,
    /// Standard.
    #[default]
    Default,
    /// Roomy.
    Lg,
}

impl TooltipSize {
    /// Stable token used for `data-ui-size` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Open state of one tooltip.
///
/// With `stay_open` set, a click on the trigger pins the tooltip open: hover
/// changes are ignored until the trigger, the tooltip body or the page outside
/// is clicked.
pub struct TooltipState {
    /// Whether the tooltip is visible.
    pub open: bool,
    /// Whether it was pinned open by a trigger click.
    pub manually_opened: bool,
}

impl TooltipState {
    /// Hover/focus driven open request.
    pub fn open_change(&mut self, open: bool, stay_open: bool) {
        if stay_open && self.manually_opened {
            return;
        }
        self.open = open;
    }

    /// Click on the trigger. Toggles the pinned state when `stay_open` is set.
    pub fn trigger_click(&mut self, stay_open: bool) {
        if !stay_open {
            return;
        }
        if self.open && self.manually_opened {
            self.open = false;
            self.manually_opened = false;
        } else if !self.open {
            self.open = true;
            self.manually_opened = true;
        }
    }

    /// Click on the tooltip body. Closes a pinned tooltip.
    pub fn content_click(&mut self, stay_open: bool) {
        if stay_open {
            self.open = false;
            self.manually_opened = false;
        }
    }

    /// Click anywhere else on the page. Unpins without closing, so the next
    /// hover change decides visibility.
    pub fn outside_click(&mut self) {
        self.manually_opened = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn positions_split_into_side_and_align() {
        assert_eq!(
            TooltipPosition::Top.placement(),
            (TooltipSide::Top, TooltipAlign::Center)
        );
        assert_eq!(
            TooltipPosition::BottomEnd.placement(),
            (TooltipSide::Bottom, TooltipAlign::End)
        );
        assert_eq!(
            TooltipPosition::TopStart.placement(),
            (TooltipSide::Top, TooltipAlign::Start)
        );
        for position in TooltipPosition::ALL {
            let json = serde_json::to_string(&position).expect("serialize");
            assert_eq!(json, format!("\"{}\"", position.token()));
        }
    }

    #[test]
    fn hover_drives_a_plain_tooltip() {
        let mut state = TooltipState::default();
        state.open_change(true, false);
        assert!(state.open);
        state.trigger_click(false);
        assert!(state.open);
        state.open_change(false, false);
        assert!(!state.open);
    }

    #[test]
    fn pinned_tooltip_ignores_hover_until_clicked() {
        let mut state = TooltipState::default();
        state.trigger_click(true);
        assert_eq!(
            state,
            TooltipState {
                open: true,
                manually_opened: true
            }
        );

        state.open_change(false, true);
        assert!(state.open);

        state.trigger_click(true);
        assert_eq!(state, TooltipState::default());
    }

    #[test]
    fn content_click_closes_pinned_tooltip() {
        let mut state = TooltipState::default();
        state.trigger_click(true);
        state.content_click(true);
        assert_eq!(state, TooltipState::default());

        let mut hovered = TooltipState::default();
        hovered.open_change(true, false);
        hovered.content_click(false);
        assert!(hovered.open);
    }

    #[test]
    fn outside_click_unpins_and_hover_takes_over() {
        let mut state = TooltipState::default();
        state.trigger_click(true);
        state.outside_click();
        assert!(state.open);
        assert!(!state.manually_opened);
        state.open_change(false, true);
        assert!(!state.open);
    }

    #[test]
    fn hover_opened_tooltip_is_not_pinned_by_click() {
        let mut state = TooltipState::default();
        state.open_change(true, true);
        state.trigger_click(true);
        assert_eq!(
            state,
            TooltipState {
                open: true,
                manually_opened: false
            }
        );
    }
}
