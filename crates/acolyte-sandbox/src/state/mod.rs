//! State management for the showcase app.

pub mod app_state;

pub use app_state::*;
