//! Output region showing generated text, loading text, or an error.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::core::{GenerationPhase, GenerationState};
use crate::tui::Theme;

/// A bordered, word-wrapped view of the generation output.
pub struct OutputWidget<'a> {
    state: &'a GenerationState,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> OutputWidget<'a> {
    /// Creates a new output widget.
    #[must_use]
    pub const fn new(state: &'a GenerationState, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            state,
            title,
            theme,
        }
    }

    /// Style of the body text for the current phase.
    fn text_style(&self) -> Style {
        match self.state.phase() {
            GenerationPhase::Idle => self.theme.placeholder_style(),
            GenerationPhase::Loading => self.theme.muted_style().add_modifier(Modifier::ITALIC),
            GenerationPhase::Success => self.theme.normal_style(),
            GenerationPhase::Error => self.theme.error_style(),
        }
    }

    fn border_style(&self) -> Style {
        match self.state.phase() {
            GenerationPhase::Error => self.theme.error_style(),
            GenerationPhase::Loading => self.theme.highlight_style(),
            GenerationPhase::Idle | GenerationPhase::Success => self.theme.border_style(),
        }
    }
}

impl Widget for OutputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![Span::styled(
                format!(" {} ", self.title),
                self.theme.header_style(),
            )]))
            .borders(Borders::ALL)
            .border_style(self.border_style());

        let lines: Vec<Line> = self
            .state
            .display_text()
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), self.text_style())))
            .collect();

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
