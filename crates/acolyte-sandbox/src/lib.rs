//! Acolyte Sandbox demo showcase
//!
//! This crate provides a Dioxus desktop application that presents the
//! catalog from `acolyte-catalog` as cards or tiles and opens demos in the
//! system browser.

pub mod components;
pub mod config;
pub mod opener;
pub mod state;
pub mod theme;
