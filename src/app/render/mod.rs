//! Rendering methods for the App.
//!
//! - **Main view**: header, sliders, output, trigger, status, and footer
//! - **Onboarding**: first-run overlay drawn over the main view

mod main_view;
mod onboarding;

use ratatui::Frame;

use super::{App, AppMode};

impl App {
    /// Renders the application UI.
    pub fn render(&self, frame: &mut Frame) {
        match self.mode {
            AppMode::Main => self.render_main(frame),
            AppMode::Onboarding => {
                // Render the main view as background, then overlay onboarding
                self.render_main(frame);
                self.render_onboarding(frame);
            }
        }
    }
}
