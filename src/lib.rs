//! Sense Tuner library
//!
//! The `calc` module holds the PSA sequencer and the DPI converter; the rest
//! is the egui shell around them.

pub mod app;
pub mod calc;
pub mod config;
pub mod constant;
pub mod messages;
pub mod style;
pub mod ui;
