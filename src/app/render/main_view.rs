//! Main view rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::core::LOADING_TEXT;
use crate::tui::widgets::{OutputWidget, SliderControl, SliderWidget, StatusIndicatorWidget};

/// Application title shown in the header.
pub(crate) const TITLE: &str = "TRUMP TWEET GENERATOR";

/// Tagline shown under the title.
pub(crate) const TAGLINE: &str = "MAKE AMERICA GREAT AGAIN";

/// Trigger label when enabled.
pub(crate) const BUTTON_LABEL: &str = "Generate Tweet";

/// Footer hints while typing a value.
const ENTRY_HINTS: &[(&str, &str)] = &[("Enter", "Set"), ("Bksp", "Delete"), ("Esc", "Cancel")];

/// Main view hints, most important first. Trailing ones are dropped on narrow terminals.
const MAIN_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "Select"),
    ("←/→", "Adjust"),
    ("Enter", "Generate"),
    ("Home/End", "Min/Max"),
    ("0-9", "Type"),
];

/// Always shown last.
const QUIT_HINT: (&str, &str) = ("q", "Quit");

/// Columns taken by a rendered `[key] action  ` hint.
fn hint_width((key, action): (&str, &str)) -> usize {
    key.chars().count() + action.chars().count() + 5
}

impl App {
    /// Renders the main view using the layout cached by `update_layout`.
    pub(crate) fn render_main(&self, frame: &mut Frame) {
        let layout = self.layout.main;

        self.render_header(frame, layout.header);

        for (param, area) in self.params.iter().zip(layout.sliders) {
            let slider = SliderControl::for_parameter(param);
            let focused = param.id == self.focus;
            let entry = if focused { self.entry() } else { None };
            frame.render_widget(
                SliderWidget::new(&slider, &self.theme)
                    .focused(focused)
                    .entry(entry),
                area,
            );
        }

        frame.render_widget(
            OutputWidget::new(self.generation.state(), "Output", &self.theme),
            layout.output,
        );

        self.render_button(frame, layout.button);

        frame.render_widget(
            StatusIndicatorWidget::new(self.generation.state(), &self.theme),
            layout.status,
        );

        self.render_footer(frame, layout.footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(TITLE, self.theme.header_style())),
            Line::from(Span::styled(TAGLINE, self.theme.muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let (label, style) = if self.is_trigger_enabled() {
            (BUTTON_LABEL, self.theme.button_style())
        } else {
            (LOADING_TEXT, self.theme.button_disabled_style())
        };
        frame.render_widget(
            Paragraph::new(Line::from(format!(" {label} ")))
                .style(style)
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints: Vec<(&str, &str)> = if self.entry.is_some() {
            ENTRY_HINTS.to_vec()
        } else {
            let mut budget = usize::from(area.width).saturating_sub(hint_width(QUIT_HINT));
            let mut hints: Vec<_> = MAIN_HINTS
                .iter()
                .copied()
                .take_while(|&hint| {
                    let width = hint_width(hint);
                    let fits = width <= budget;
                    budget = budget.saturating_sub(width);
                    fits
                })
                .collect();
            hints.push(QUIT_HINT);
            hints
        };

        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(format!("[{key}] "), self.theme.highlight_style()),
                    Span::styled(format!("{action}  "), self.theme.muted_style()),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
