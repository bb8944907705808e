//! # Acolyte Catalog
//!
//! Catalog and session state for the Acolyte Sandbox demo showcase.
//!
//! The showcase is a fixed list of external AI demos drawn as cards or
//! tiles. This crate holds everything about that page that is not drawing:
//!
//! - **Catalog**: validated, immutable [`DemoRecord`]s and the two built-in
//!   showcases
//! - **ViewMode**: the cards/tiles layout switch
//! - **VisitTracker**: visited demos, completion percentage and achievement
//!   level, persisted through a [`SettingsStore`]
//! - **CategorySelector**: per-card category choice and the resulting
//!   destination
//! - **render**: pure view models for the UI layer
//! - **Session**: all of the above behind one [`PageVariant`] flag
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use acolyte_catalog::{MediaResolver, MemorySettingsStore, PageVariant, Session};
//!
//! let variant = PageVariant::Progress;
//! let mut session = Session::new(
//!     variant,
//!     Arc::new(variant.catalog().unwrap()),
//!     Arc::new(MemorySettingsStore::new()),
//! );
//!
//! session.record_visit("video-creation");
//! let view = session.render(&MediaResolver::new());
//! assert_eq!(view.progress.unwrap().percentage, 33);
//! ```

pub mod catalog;
pub mod error;
pub mod record;
pub mod render;
pub mod selector;
pub mod session;
pub mod settings;
pub mod tracker;
pub mod view_mode;

pub use catalog::Catalog;
pub use error::{CatalogError, LinkError, SettingsError};
pub use record::{
    CategoryLink, DemoRecord, Destination, Media, PLACEHOLDER_IMAGE, ShowcaseLabel,
    VIDEO_EXTENSION,
};
pub use render::{CardModel, CatalogView, CategoryControl, MediaResolver, render_catalog};
pub use selector::{COMING_SOON_LABEL, CategorySelector, DemoAction, VIEW_DEMO_LABEL};
pub use session::{Activation, LinkOpener, PageVariant, ParseVariantError, Session};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use tracker::{
    AchievementLevel, ProgressSummary, VISITED_DEMOS_KEY, VisitTracker, completion_percentage,
    decode_visited, encode_visited,
};
pub use view_mode::{ParseViewModeError, ViewMode};
