//! Layout calculation helpers for the TUI.
//!
//! This module provides a single source of truth for layout definitions,
//! ensuring that `App::update_layout` and `App::render` always agree.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::widgets::SLIDER_HEIGHT;

/// Number of parameter sliders.
const SLIDER_COUNT: usize = 3;

/// Layout information for the main view.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainLayout {
    /// Title and tagline (2 lines).
    pub header: Rect,
    /// One area per slider, in display order.
    pub sliders: [Rect; SLIDER_COUNT],
    /// Output region (grows).
    pub output: Rect,
    /// Trigger button (1 line).
    pub button: Rect,
    /// Status indicator (2 lines).
    pub status: Rect,
    /// Footer area (key hints, 1 line).
    pub footer: Rect,
}

/// Layout constraints for the main view.
const MAIN_LAYOUT_CONSTRAINTS: [Constraint; 6] = [
    Constraint::Length(2),                                   // Header
    Constraint::Length(SLIDER_HEIGHT * SLIDER_COUNT as u16), // Sliders
    Constraint::Min(3),                                      // Output (grows)
    Constraint::Length(1),                                   // Button
    Constraint::Length(2),                                   // Status
    Constraint::Length(1),                                   // Footer
];

/// Calculates the layout for the main view.
#[must_use]
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::vertical(MAIN_LAYOUT_CONSTRAINTS).split(area);
    let slider_chunks =
        Layout::vertical([Constraint::Length(SLIDER_HEIGHT); SLIDER_COUNT]).split(chunks[1]);

    MainLayout {
        header: chunks[0],
        sliders: [slider_chunks[0], slider_chunks[1], slider_chunks[2]],
        output: chunks[2],
        button: chunks[3],
        status: chunks[4],
        footer: chunks[5],
    }
}

/// Returns a `width` x `height` rectangle centered in `area`, shrunk to fit.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
