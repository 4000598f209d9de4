//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `generation` - Trigger, request lifecycle, and HTTP round trips
//! - `helpers` - Shared test utilities
//! - `onboarding` - First-run overlay behavior
//! - `sliders` - Focus, stepping, and typed entry
//! - `ui` - Rendered frame assertions

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod sliders;
