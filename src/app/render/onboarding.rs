//! Onboarding overlay rendering.
//!
//! Drawn over the main view on first start, until one of the dismissal keys
//! is pressed.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, centered_rect};

/// Overlay title.
pub(crate) const ONBOARDING_TITLE: &str = " Welcome ";

impl App {
    /// Renders the onboarding overlay as a centered popup.
    pub(crate) fn render_onboarding(&self, frame: &mut Frame) {
        let popup_area = centered_rect(frame.area(), 56, 14);

        // Clear background under the popup
        frame.render_widget(Clear, popup_area);

        let content_lines = vec![
            Line::from(Span::styled(
                "Generate tweets from a character-level model",
                self.theme.header_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Tune the three sliders, then press Enter to send them to the model.",
                self.theme.normal_style(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Temperature ", self.theme.highlight_style()),
                Span::styled("controls how adventurous the text is.", self.theme.muted_style()),
            ]),
            Line::from(vec![
                Span::styled("Top-k ", self.theme.highlight_style()),
                Span::styled("limits choices to the k likeliest.", self.theme.muted_style()),
            ]),
            Line::from(vec![
                Span::styled("Max tokens ", self.theme.highlight_style()),
                Span::styled("sets the length.", self.theme.muted_style()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter/Esc] ", self.theme.highlight_style()),
                Span::styled("Got it", self.theme.muted_style()),
            ]),
        ];

        let block = Block::default()
            .title(ONBOARDING_TITLE)
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        let paragraph = Paragraph::new(content_lines)
            .block(block)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
    }
}
