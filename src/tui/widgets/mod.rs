//! Custom TUI widgets.

pub mod output;
pub mod slider;
pub mod status_indicator;

pub use output::OutputWidget;
pub use slider::{SLIDER_HEIGHT, SliderControl, SliderInput, SliderWidget};
pub use status_indicator::StatusIndicatorWidget;
