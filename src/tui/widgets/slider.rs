//! Generic bounded-value slider.
//!
//! [`SliderControl`] turns one user interaction into a proposed value and
//! reports it through a callback. It never clamps: bounds are enforced by
//! whoever owns the value (see `ParameterStore::set`). [`SliderWidget`] draws
//! the control as a label line, a bar, and a description.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::{ParamSpec, Parameter};
use crate::tui::Theme;

/// Height in rows of a rendered slider.
pub const SLIDER_HEIGHT: u16 = 3;

/// One user interaction with a slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderInput {
    /// Move one step up.
    Increment,
    /// Move one step down.
    Decrement,
    /// Jump to the lower bound.
    ToMin,
    /// Jump to the upper bound.
    ToMax,
    /// A typed value, committed as text.
    Entry(String),
}

/// A slider bound to one parameter's value.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderControl {
    spec: ParamSpec,
    pub value: f64,
}

impl SliderControl {
    /// Creates a control mirroring a parameter's bounds and current value.
    #[must_use]
    pub fn for_parameter(param: &Parameter) -> Self {
        Self {
            spec: *param.spec(),
            value: param.value(),
        }
    }

    /// Returns the bounds this control steps within.
    #[must_use]
    pub const fn spec(&self) -> &ParamSpec {
        &self.spec
    }

    /// Returns the value `input` proposes, or `None` if the entry does not parse.
    #[must_use]
    pub fn propose(&self, input: &SliderInput) -> Option<f64> {
        match input {
            SliderInput::Increment => Some(self.value + self.spec.step),
            SliderInput::Decrement => Some(self.value - self.spec.step),
            SliderInput::ToMin => Some(self.spec.min),
            SliderInput::ToMax => Some(self.spec.max),
            SliderInput::Entry(raw) => raw.trim().parse().ok(),
        }
    }

    /// Interprets `input` and calls `on_change` once with the proposed value.
    ///
    /// Returns false, without calling `on_change`, when a typed entry does not
    /// parse as a number.
    pub fn handle(&self, input: &SliderInput, mut on_change: impl FnMut(f64)) -> bool {
        match self.propose(input) {
            Some(value) => {
                on_change(value);
                true
            }
            None => false,
        }
    }

    /// Returns the value formatted for display.
    #[must_use]
    pub fn display_value(&self) -> String {
        self.spec.format(self.value)
    }

    /// Returns the value's position between `min` and `max` as `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        let span = self.spec.max - self.spec.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.spec.min) / span).clamp(0.0, 1.0)
    }
}

/// Renders a [`SliderControl`].
pub struct SliderWidget<'a> {
    control: &'a SliderControl,
    focused: bool,
    /// Text typed so far, when the user is entering a value.
    entry: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> SliderWidget<'a> {
    #[must_use]
    pub const fn new(control: &'a SliderControl, theme: &'a Theme) -> Self {
        Self {
            control,
            focused: false,
            entry: None,
            theme,
        }
    }

    /// Marks the slider as focused.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Shows an in-progress typed entry instead of the value.
    #[must_use]
    pub const fn entry(mut self, entry: Option<&'a str>) -> Self {
        self.entry = entry;
        self
    }

    fn label_line(&self) -> Line<'a> {
        let (marker, label_style) = if self.focused {
            ("▸ ", self.theme.highlight_style())
        } else {
            ("  ", self.theme.normal_style())
        };

        let value = match self.entry {
            Some(text) => Span::styled(format!("{text}▏"), self.theme.warning_style()),
            None => Span::styled(self.control.display_value(), self.theme.normal_style()),
        };

        Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(self.control.spec.label, label_style),
            Span::raw("  "),
            value,
        ])
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )] // Bar widths are terminal columns.
    fn bar_line(&self, width: u16) -> Line<'a> {
        let spec = self.control.spec;
        let bounds = format!(" {}..{}", spec.format(spec.min), spec.format(spec.max));
        let bounds_width = u16::try_from(bounds.chars().count()).unwrap_or(u16::MAX);
        let track = width.saturating_sub(2).saturating_sub(bounds_width) as usize;
        if track == 0 {
            return Line::from(Span::raw("  "));
        }

        let knob = (self.control.fraction() * (track - 1) as f64).round() as usize;
        let knob_style = if self.focused {
            self.theme.highlight_style()
        } else {
            self.theme.normal_style()
        };

        Line::from(vec![
            Span::raw("  "),
            Span::styled("━".repeat(knob), self.theme.progress_style()),
            Span::styled("●", knob_style),
            Span::styled(
                "─".repeat(track - knob - 1),
                self.theme.progress_remaining_style(),
            ),
            Span::styled(bounds, self.theme.muted_style()),
        ])
    }
}

impl Widget for SliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![self.label_line()];
        if area.height >= 2 {
            lines.push(self.bar_line(area.width));
        }
        if area.height >= 3 {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(self.control.spec.description, self.theme.muted_style()),
            ]));
        }
        Paragraph::new(lines).render(area, buf);
    }
}
