//! Main application state and logic.
//!
//! This module contains the core App struct and its implementation,
//! organized into submodules:
//! - `render` - UI rendering
//! - `state` - Application state structures
//! - `events` - Key handling
//!
//! ## Application Modes
//!
//! - **`Main`**: three parameter sliders, the output region, and the trigger.
//! - **`Onboarding`**: first-run overlay drawn over the main view until dismissed.
//!
//! Generation runs on a background task; its result arrives through the
//! controller's channel and is applied in [`App::process_events`], so the
//! sliders stay responsive while a request is in flight.

pub mod events;
mod layout;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{MainLayout, calculate_main_layout, centered_rect};

use std::sync::Arc;

use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::core::{
    GenerationController, GenerationService, GenerationState, ParamId, ParameterStore,
};
use crate::fs::{KeyValueStore, OnboardingGate};
use crate::tui::Theme;
use crate::tui::widgets::{SliderControl, SliderInput};

pub use self::state::{AppMode, EntryState, LayoutState};

/// Main application state.
pub struct App {
    /// Current parameter values.
    pub(crate) params: ParameterStore,
    /// Slider receiving keyboard input.
    pub(crate) focus: ParamId,
    /// In-progress typed value for the focused slider.
    pub(crate) entry: Option<EntryState>,
    /// Request lifecycle.
    pub(crate) generation: GenerationController,
    /// First-run overlay gate.
    pub(crate) onboarding: OnboardingGate,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Current application mode.
    pub(crate) mode: AppMode,
    /// Dynamic layout dimensions.
    pub(crate) layout: LayoutState,
    /// Should quit flag.
    should_quit: bool,
}

impl App {
    /// Creates the application.
    ///
    /// Reads the onboarding flag from `store` once; the overlay is shown if it
    /// has not been dismissed before.
    #[must_use]
    pub fn new(service: Arc<dyn GenerationService>, store: Arc<dyn KeyValueStore>) -> Self {
        let onboarding = OnboardingGate::load(store);
        let mode = if onboarding.is_visible() {
            AppMode::Onboarding
        } else {
            AppMode::Main
        };

        Self {
            params: ParameterStore::new(),
            focus: ParamId::default(),
            entry: None,
            generation: GenerationController::new(service),
            onboarding,
            theme: Theme::default(),
            mode,
            layout: LayoutState::default(),
            should_quit: false,
        }
    }

    /// Returns true if the application should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> AppMode {
        self.mode
    }

    /// Returns the parameter values.
    #[must_use]
    pub const fn params(&self) -> &ParameterStore {
        &self.params
    }

    /// Returns the focused parameter.
    #[must_use]
    pub const fn focus(&self) -> ParamId {
        self.focus
    }

    /// Returns the typed entry for the focused slider, if one is in progress.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.buffer.as_str())
    }

    /// Returns the generation state.
    #[must_use]
    pub fn generation_state(&self) -> &GenerationState {
        self.generation.state()
    }

    /// Returns true while the onboarding overlay is shown.
    #[must_use]
    pub const fn is_onboarding_visible(&self) -> bool {
        self.onboarding.is_visible()
    }

    /// Returns true if the trigger accepts presses.
    #[must_use]
    pub fn is_trigger_enabled(&self) -> bool {
        !self.generation.state().is_loading()
    }

    /// Builds the slider for `id` from its current value.
    pub(crate) fn slider(&self, id: ParamId) -> SliderControl {
        SliderControl::for_parameter(self.params.param(id))
    }

    /// Feeds `input` to the focused slider and stores the corrected value.
    ///
    /// Returns false if a typed entry did not parse.
    pub fn adjust(&mut self, input: &SliderInput) -> bool {
        let id = self.focus;
        let slider = self.slider(id);
        let params = &mut self.params;
        slider.handle(input, |proposed| {
            let stored = params.set(id, proposed);
            debug!(parameter = ?id, proposed, stored, "parameter changed");
        })
    }

    /// Starts a generation request from the current parameter values.
    ///
    /// Does nothing while a request is in flight. Returns the request's
    /// generation number when one was issued.
    pub fn generate(&mut self) -> Option<u64> {
        if !self.is_trigger_enabled() {
            debug!("trigger pressed while loading; ignored");
            return None;
        }
        let request = self.params.snapshot();
        Some(self.generation.generate(request))
    }

    /// Hides the onboarding overlay and persists that it was seen.
    pub fn dismiss_onboarding(&mut self) {
        if let Err(e) = self.onboarding.dismiss() {
            warn!(error = %e, "failed to persist onboarding flag");
        }
        self.mode = AppMode::Main;
    }

    /// Applies any generation results that have arrived.
    ///
    /// Returns true if the state changed.
    pub fn process_events(&mut self) -> bool {
        self.generation.process_events()
    }

    /// Waits for the next generation result and applies it.
    pub async fn next_generation_event(&mut self) -> bool {
        self.generation.next_event().await.is_some()
    }

    /// Updates layout dimensions based on the terminal size.
    ///
    /// Must be called inside the draw closure with the frame area so
    /// rendering uses the same rectangles.
    pub fn update_layout(&mut self, area: Rect) {
        self.layout.main = calculate_main_layout(area);
    }

    /// Requests application exit.
    pub(crate) fn quit(&mut self) {
        self.should_quit = true;
    }
}
