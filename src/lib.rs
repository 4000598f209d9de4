//! `tweetgen` - terminal client for a remote tweet-generation model
//!
//! Tune three sampling parameters with sliders, send them to the model,
//! and read the generated text.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod tui;
