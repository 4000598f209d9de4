//! Application state structures.

use crate::app::MainLayout;

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Sliders, output and trigger.
    #[default]
    Main,
    /// First-run onboarding overlay on top of the main view.
    /// Only dismissal keys and Ctrl+C are handled.
    Onboarding,
}

/// A value being typed into the focused slider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryState {
    /// Characters typed so far.
    pub buffer: String,
}

impl EntryState {
    /// Starts an entry with its first character.
    #[must_use]
    pub fn starting_with(c: char) -> Self {
        Self {
            buffer: c.to_string(),
        }
    }

    /// Returns true if `c` may appear in a typed number.
    #[must_use]
    pub const fn accepts(c: char) -> bool {
        c.is_ascii_digit() || c == '.' || c == '-'
    }
}

/// Layout state that caches computed dimensions.
///
/// Recomputed each frame in `App::update_layout` and read back by rendering,
/// so both always agree on where each region is.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    /// The cached main layout, calculated once per frame.
    pub main: MainLayout,
}
