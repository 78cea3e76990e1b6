//! Slider geometry: fill percentage, tick positions, marks.

use serde::{Deserialize, Serialize};

/// Upper bound on tick intervals drawn under a slider.
pub const MAX_TICKS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Numeric domain of a range input.
pub struct RangeOptions {
    /// Lowest value; also the value restored by clearing.
    pub min: f64,
    /// Highest value.
    pub max: f64,
    /// Native step.
    pub step: f64,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl RangeOptions {
    /// Position of `value` along the track, 0–100. A degenerate domain
    /// (`min == max`) yields 0.
    pub fn percentage(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        (value - self.min) / span * 100.0
    }

    /// Tick values and their track positions, from `min` to `max` inclusive.
    /// `tick_step` defaults to the native step; non-positive steps, and steps
    /// that would need more than [`MAX_TICKS`] intervals, yield no ticks.
    pub fn ticks(&self, tick_step: Option<f64>) -> Vec<(f64, f64)> {
        let step = tick_step.unwrap_or(self.step);
        if !(step > 0.0) || self.max < self.min {
            return Vec::new();
        }
        let intervals = ((self.max - self.min) / step + 1e-9).floor();
        if !intervals.is_finite() || intervals > MAX_TICKS as f64 {
            return Vec::new();
        }
        (0..=intervals as usize)
            .map(|index| {
                let value = self.min + step * index as f64;
                (value, self.percentage(value))
            })
            .collect()
    }

    /// Value restored by the clear button.
    pub fn clear_value(&self) -> f64 {
        self.min
    }

    /// The clear button only shows once the value has moved off `min`.
    pub fn can_clear(&self, value: f64) -> bool {
        value != self.min
    }

    /// Value used when the owner supplies neither a value nor a default.
    pub fn initial_value(&self, default: Option<f64>) -> f64 {
        default.unwrap_or(self.min)
    }
}

/// Parses the native slider's text value. Unparseable text falls back to `fallback`.
pub fn parse_range_input(text: &str, fallback: f64) -> f64 {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite()).unwrap_or(fallback)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Labelled position drawn under the track.
pub struct RangeMark {
    /// Position on the value scale.
    pub value: f64,
    /// Optional label; the value itself is shown when absent.
    #[serde(default)]
    pub label: Option<String>,
}

impl RangeMark {
    /// Mark with a label.
    pub fn labelled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    /// Text rendered for the mark.
    pub fn text(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Slider axis.
pub enum RangeOrientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Bottom to top.
    Vertical,
}

impl RangeOrientation {
    /// Stable token used for `data-ui-orientation` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// CSS property that places ticks and marks along the axis.
    pub const fn offset_property(self) -> &'static str {
        match self {
            Self::Horizontal => "left",
            Self::Vertical => "bottom",
        }
    }

    /// CSS property that sizes the fill bar.
    pub const fn extent_property(self) -> &'static str {
        match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn percentage_tracks_the_domain() {
        let options = RangeOptions::default();
        assert_eq!(options.percentage(0.0), 0.0);
        assert_eq!(options.percentage(25.0), 25.0);
        assert_eq!(options.percentage(100.0), 100.0);

        let shifted = RangeOptions {
            min: -50.0,
            max: 50.0,
            step: 5.0,
        };
        assert_eq!(shifted.percentage(0.0), 50.0);
    }

    #[test]
    fn degenerate_domain_reports_zero() {
        let flat = RangeOptions {
            min: 10.0,
            max: 10.0,
            step: 1.0,
        };
        assert_eq!(flat.percentage(10.0), 0.0);
        assert_eq!(flat.ticks(None), vec![(10.0, 0.0)]);
    }

    #[test]
    fn ticks_cover_both_ends() {
        let options = RangeOptions::default();
        let ticks = options.ticks(Some(25.0));
        assert_eq!(
            ticks,
            vec![(0.0, 0.0), (25.0, 25.0), (50.0, 50.0), (75.0, 75.0), (100.0, 100.0)]
        );
        assert_eq!(options.ticks(None).len(), 101);
        assert!(options.ticks(Some(0.0)).is_empty());

        let fractional = RangeOptions {
            min: 0.0,
            max: 1.0,
            step: 0.1,
        };
        assert_eq!(fractional.ticks(None).len(), 11);
    }

    #[test]
    fn dense_tick_steps_render_nothing() {
        let options = RangeOptions::default();
        assert!(options.ticks(Some(1e-300)).is_empty());
        assert!(options.ticks(Some(0.01)).is_empty());
        assert_eq!(options.ticks(Some(0.5)).len(), 201);

        let unbounded = RangeOptions {
            min: 0.0,
            max: f64::INFINITY,
            step: 1.0,
        };
        assert!(unbounded.ticks(None).is_empty());
    }

    #[test]
    fn clearing_returns_to_min() {
        let options = RangeOptions {
            min: 5.0,
            max: 15.0,
            step: 1.0,
        };
        assert_eq!(options.clear_value(), 5.0);
        assert!(!options.can_clear(5.0));
        assert!(options.can_clear(6.0));
        assert_eq!(options.initial_value(None), 5.0);
        assert_eq!(options.initial_value(Some(9.0)), 9.0);
    }

    #[test]
    fn parses_slider_text() {
        assert_eq!(parse_range_input("42", 0.0), 42.0);
        assert_eq!(parse_range_input(" 2.5 ", 0.0), 2.5);
        assert_eq!(parse_range_input("", 7.0), 7.0);
        assert_eq!(parse_range_input("NaN", 7.0), 7.0);
    }

    #[test]
    fn marks_fall_back_to_value_text() {
        assert_eq!(RangeMark::labelled(50.0, "Half").text(), "Half");
        let bare = RangeMark {
            value: 75.0,
            label: None,
        };
        assert_eq!(bare.text(), "75");
        assert_eq!(RangeOrientation::Vertical.offset_property(), "bottom");
    }
}
