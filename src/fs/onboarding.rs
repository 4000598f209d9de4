//! One-time onboarding overlay gate.
//!
//! The gate reads the persisted flag exactly once, when it is loaded. After
//! that the in-memory `visible` field is authoritative for the session; the
//! store is only written, never re-read.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::store::KeyValueStore;

/// Store key holding the onboarding flag.
pub const ONBOARDING_KEY: &str = "onboarding_seen";

/// Decides whether the onboarding overlay is shown.
pub struct OnboardingGate {
    store: Arc<dyn KeyValueStore>,
    visible: bool,
}

impl OnboardingGate {
    /// Reads the flag from `store` and creates the gate.
    ///
    /// The overlay is visible unless the flag is present and `"true"`.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let seen = store.get(ONBOARDING_KEY).is_some_and(|v| v == "true");
        Self {
            store,
            visible: !seen,
        }
    }

    /// Returns true if the overlay should be drawn.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hides the overlay and persists the flag.
    ///
    /// Calling it again rewrites the same value. The overlay stays hidden for
    /// the session even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be written.
    pub fn dismiss(&mut self) -> Result<()> {
        if self.visible {
            info!("onboarding overlay dismissed");
        }
        self.visible = false;
        self.store.set(ONBOARDING_KEY, "true")
    }
}
