//! Page session: the catalog plus every piece of mutable page state.
//!
//! A [`Session`] is what the desktop app keeps in its root signal. Event
//! handlers call the mutators here, then the components re-read
//! [`Session::render`].

use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{CatalogError, LinkError};
use crate::record::Destination;
use crate::render::{CatalogView, MediaResolver, render_catalog};
use crate::selector::{CategorySelector, DemoAction};
use crate::settings::SettingsStore;
use crate::tracker::VisitTracker;
use crate::view_mode::ViewMode;

/// Opens outbound demo links outside the page.
pub trait LinkOpener: Send + Sync + Debug {
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Which of the two page feature sets is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageVariant {
    /// Single link per demo, visited-demo progress banner.
    #[default]
    Progress,
    /// Per-card category selector, no progress tracking.
    Categories,
}

impl PageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageVariant::Progress => "progress",
            PageVariant::Categories => "categories",
        }
    }

    /// The built-in catalog for this variant.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match self {
            PageVariant::Progress => Catalog::progress_showcase(),
            PageVariant::Categories => Catalog::category_showcase(),
        }
    }

    pub fn tracks_progress(&self) -> bool {
        matches!(self, PageVariant::Progress)
    }

    pub fn switches_categories(&self) -> bool {
        matches!(self, PageVariant::Categories)
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither page variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page variant `{0}` (expected `progress` or `categories`)")]
pub struct ParseVariantError(String);

impl FromStr for PageVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "progress" => Ok(PageVariant::Progress),
            "categories" => Ok(PageVariant::Categories),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// Result of activating a card's action control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The link was handed to the opener.
    Opened(String),
    /// The destination is "coming soon"; nothing happened.
    Disabled,
    /// No demo with that id.
    UnknownDemo,
    /// The opener failed. The visit, if tracked, was still recorded.
    Failed(LinkError),
}

/// All interactive state of the showcase page.
#[derive(Debug, Clone)]
pub struct Session {
    variant: PageVariant,
    catalog: Arc<Catalog>,
    view_mode: ViewMode,
    tracker: Option<VisitTracker>,
    selector: Option<CategorySelector>,
}

impl Session {
    /// Creates the session for `variant`.
    ///
    /// Progress sessions load the visited set from `store`; category
    /// sessions never touch it.
    pub fn new(variant: PageVariant, catalog: Arc<Catalog>, store: Arc<dyn SettingsStore>) -> Self {
        let tracker = variant
            .tracks_progress()
            .then(|| VisitTracker::load(catalog.clone(), store));
        let selector = variant
            .switches_categories()
            .then(|| CategorySelector::new(catalog.clone()));

        info!(variant = %variant, demos = catalog.len(), "Session created");

        Self {
            variant,
            catalog,
            view_mode: ViewMode::default(),
            tracker,
            selector,
        }
    }

    /// Sets the initial layout.
    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            debug!(from = %self.view_mode, to = %mode, "Switching layout");
            self.view_mode = mode;
        }
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.view_mode.toggled());
    }

    pub fn tracker(&self) -> Option<&VisitTracker> {
        self.tracker.as_ref()
    }

    pub fn selector(&self) -> Option<&CategorySelector> {
        self.selector.as_ref()
    }

    /// Chooses a category; a no-op returning `false` in progress sessions
    /// and for tags the demo does not offer.
    pub fn select_category(&mut self, demo_id: &str, tag: &str) -> bool {
        match self.selector.as_mut() {
            Some(selector) => selector.select_category(demo_id, tag),
            None => false,
        }
    }

    /// Marks a demo visited; a no-op in category sessions.
    pub fn record_visit(&mut self, demo_id: &str) -> bool {
        match self.tracker.as_mut() {
            Some(tracker) => tracker.record_visit(demo_id),
            None => false,
        }
    }

    /// Clears tracked progress, if any.
    pub fn reset_progress(&mut self) {
        if let Some(tracker) = self.tracker.as_mut() {
            info!("Resetting demo progress");
            tracker.reset();
        }
    }

    /// Destination of a demo's action control.
    pub fn resolve_url(&self, demo_id: &str) -> Option<Destination> {
        match &self.selector {
            Some(selector) => selector.resolve_url(demo_id).cloned(),
            None => {
                let record = self.catalog.get(demo_id)?;
                let tag = record.first_category()?;
                record.destination_for(tag).cloned()
            }
        }
    }

    pub fn action(&self, demo_id: &str) -> Option<DemoAction> {
        self.resolve_url(demo_id).map(DemoAction::new)
    }

    /// Handles a click on a card's action control.
    ///
    /// Live destinations record the visit and go to `opener`. The page
    /// itself never navigates.
    pub fn activate_demo(&mut self, demo_id: &str, opener: &dyn LinkOpener) -> Activation {
        let Some(action) = self.action(demo_id) else {
            return Activation::UnknownDemo;
        };
        let Some(url) = action.href().map(str::to_string) else {
            debug!(demo = demo_id, "Action is disabled, coming soon");
            return Activation::Disabled;
        };

        self.record_visit(demo_id);

        match opener.open(&url) {
            Ok(()) => {
                info!(demo = demo_id, url = %url, "Opened demo");
                Activation::Opened(url)
            }
            Err(e) => {
                warn!(demo = demo_id, error = %e, "Could not open demo");
                Activation::Failed(e)
            }
        }
    }

    /// Builds the current view.
    pub fn render(&self, media: &MediaResolver) -> CatalogView {
        render_catalog(
            &self.catalog,
            self.view_mode,
            self.tracker.as_ref(),
            self.selector.as_ref(),
            media,
        )
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::settings::MemorySettingsStore;

    #[derive(Debug, Default)]
    struct Recorder {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for Recorder {
        fn open(&self, url: &str) -> Result<(), LinkError> {
            self.opened.lock().push(url.to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl LinkOpener for Broken {
        fn open(&self, url: &str) -> Result<(), LinkError> {
            Err(LinkError::new(url, "no browser"))
        }
    }

    fn session(variant: PageVariant) -> Session {
        Session::new(
            variant,
            Arc::new(variant.catalog().unwrap()),
            Arc::new(MemorySettingsStore::new()),
        )
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Categories".parse(), Ok(PageVariant::Categories));
        assert_eq!("progress".parse(), Ok(PageVariant::Progress));
        assert!("both".parse::<PageVariant>().is_err());
    }

    #[test]
    fn test_progress_session_activation() {
        let mut session = session(PageVariant::Progress);
        let opener = Recorder::default();

        let outcome = session.activate_demo("video-creation", &opener);
        assert_eq!(
            outcome,
            Activation::Opened("https://acolyte-veo-v3-demo.vercel.app/".into())
        );
        assert!(session.tracker().unwrap().is_visited("video-creation"));
        assert_eq!(opener.opened.lock().len(), 1);
    }

    #[test]
    fn test_unknown_demo_activation() {
        let mut session = session(PageVariant::Progress);
        assert_eq!(
            session.activate_demo("nope", &Recorder::default()),
            Activation::UnknownDemo
        );
    }

    #[test]
    fn test_disabled_activation_records_nothing() {
        let mut session = session(PageVariant::Categories);
        assert!(session.select_category("realtime-persona", "Sales Training"));

        let opener = Recorder::default();
        assert_eq!(
            session.activate_demo("realtime-persona", &opener),
            Activation::Disabled
        );
        assert!(opener.opened.lock().is_empty());
    }

    #[test]
    fn test_failed_open_still_counts_visit() {
        let mut session = session(PageVariant::Progress);
        let outcome = session.activate_demo("realtime-persona", &Broken);
        assert!(matches!(outcome, Activation::Failed(_)));
        assert_eq!(session.tracker().unwrap().visited_count(), 1);
    }

    #[test]
    fn test_variant_specific_state() {
        let mut progress = session(PageVariant::Progress);
        assert!(progress.selector().is_none());
        assert!(!progress.select_category("realtime-persona", "Conversational AI"));

        let mut categories = session(PageVariant::Categories);
        assert!(categories.tracker().is_none());
        assert!(!categories.record_visit("realtime-persona"));
        assert!(categories.render(&MediaResolver::new()).progress.is_none());
    }

    #[test]
    fn test_view_mode_from_builder() {
        let session = session(PageVariant::Progress).with_view_mode(ViewMode::Tiles);
        assert_eq!(session.view_mode(), ViewMode::Tiles);
        assert_eq!(session.render(&MediaResolver::new()).layout, ViewMode::Tiles);
    }
}
