//! Compact status indicator for the generation request.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::{GenerationPhase, GenerationState};
use crate::tui::Theme;

/// A 2-line status indicator widget.
///
/// Displays the request phase without borders, above the key hints.
pub struct StatusIndicatorWidget<'a> {
    state: &'a GenerationState,
    theme: &'a Theme,
}

impl<'a> StatusIndicatorWidget<'a> {
    /// Creates a new status indicator widget.
    #[must_use]
    pub const fn new(state: &'a GenerationState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Gets the icon for the current phase.
    fn phase_icon(&self) -> &'static str {
        match self.state.phase() {
            GenerationPhase::Idle => "·",
            GenerationPhase::Loading => "▶",
            GenerationPhase::Success => "✓",
            GenerationPhase::Error => "✗",
        }
    }

    /// Gets the primary status text for line 1.
    fn primary_status(&self) -> String {
        match self.state.phase() {
            GenerationPhase::Idle => "Ready".to_string(),
            GenerationPhase::Loading => {
                format!("Generating (request #{})", self.state.latest_generation())
            }
            GenerationPhase::Success => "Generated".to_string(),
            GenerationPhase::Error => "Request failed".to_string(),
        }
    }

    /// Gets the secondary status text for line 2.
    fn secondary_status(&self) -> String {
        let hint = match self.state.phase() {
            GenerationPhase::Idle => "Tune the sliders, then press Enter",
            GenerationPhase::Loading => "Sliders stay adjustable while waiting",
            GenerationPhase::Success => "Press Enter to generate again",
            GenerationPhase::Error => "Check the log file for details",
        };
        match self.state.discarded() {
            0 => hint.to_string(),
            1 => format!("{hint} (1 stale response ignored)"),
            n => format!("{hint} ({n} stale responses ignored)"),
        }
    }

    /// Gets the style for the icon based on phase.
    fn icon_style(&self) -> Style {
        match self.state.phase() {
            GenerationPhase::Idle => self.theme.muted_style(),
            GenerationPhase::Loading => self.theme.highlight_style(),
            GenerationPhase::Success => self.theme.success_style(),
            GenerationPhase::Error => self.theme.error_style(),
        }
    }
}

impl Widget for StatusIndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let primary = Line::from(vec![
            Span::styled(format!(" {} ", self.phase_icon()), self.icon_style()),
            Span::styled(self.primary_status(), self.theme.normal_style()),
        ]);

        if area.height < 2 {
            Paragraph::new(primary).render(area, buf);
            return;
        }

        let lines = vec![
            primary,
            Line::from(vec![
                Span::raw("   "),
                Span::styled(self.secondary_status(), self.theme.muted_style()),
            ]),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}
