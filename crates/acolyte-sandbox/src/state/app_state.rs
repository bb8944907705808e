//! Main application state for the showcase app.

use std::sync::Arc;

use acolyte_catalog::{
    Activation, CatalogError, CatalogView, LinkOpener, MediaResolver, PageVariant, Session,
    ViewMode,
};

use crate::config::SandboxConfig;

/// Main application state.
///
/// Lives in the root `Signal`; handlers mutate it and components redraw
/// from [`AppState::view`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog plus view mode, progress and category selections.
    pub session: Session,

    /// Media lookup used when rendering cards.
    pub media: MediaResolver,

    /// Where activated demo links go.
    opener: Arc<dyn LinkOpener>,

    /// Last link that failed to open, shown as a notice.
    pub open_error: Option<String>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(session: Session, media: MediaResolver, opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            session,
            media,
            opener,
            open_error: None,
        }
    }

    /// Builds the state described by `config`.
    pub fn from_config(
        config: &SandboxConfig,
        opener: Arc<dyn LinkOpener>,
    ) -> Result<Self, CatalogError> {
        let catalog = Arc::new(config.variant.catalog()?);
        let mut session = Session::new(config.variant, catalog, config.open_store())
            .with_view_mode(config.view_mode);

        if config.reset_progress {
            session.reset_progress();
        }

        Ok(Self::new(session, config.media_resolver(), opener))
    }

    pub fn variant(&self) -> PageVariant {
        self.session.variant()
    }

    /// Renders the catalog for the current state.
    pub fn view(&self) -> CatalogView {
        self.session.render(&self.media)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.session.set_view_mode(mode);
    }

    pub fn select_category(&mut self, demo_id: &str, tag: &str) {
        self.session.select_category(demo_id, tag);
    }

    /// Handles a click on a card's action control.
    pub fn activate_demo(&mut self, demo_id: &str) -> Activation {
        let opener = self.opener.clone();
        let outcome = self.session.activate_demo(demo_id, opener.as_ref());
        self.open_error = match &outcome {
            Activation::Failed(e) => Some(e.to_string()),
            _ => None,
        };
        outcome
    }

    /// Dismisses the open-failure notice.
    pub fn clear_open_error(&mut self) {
        self.open_error = None;
    }
}

#[cfg(test)]
mod tests {
    use acolyte_catalog::{FileSettingsStore, LinkError, SettingsStore};
    use parking_lot::Mutex;

    use super::*;

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
    struct NoBrowser;

    impl LinkOpener for NoBrowser {
        fn open(&self, url: &str) -> Result<(), LinkError> {
            Err(LinkError::new(url, "no browser found"))
        }
    }

    fn launch_context<T: Clone + Send + Sync + 'static>(_: &T) {}

    fn config(dir: &tempfile::TempDir, variant: PageVariant) -> SandboxConfig {
        SandboxConfig {
            variant,
            data_dir: dir.path().to_path_buf(),
            ..SandboxConfig::default()
        }
    }

    #[test]
    fn test_from_config_applies_view_mode() {
        let dir = tempfile::tempdir().unwrap();
        let config = SandboxConfig {
            view_mode: ViewMode::Tiles,
            ..config(&dir, PageVariant::Progress)
        };

        let state = AppState::from_config(&config, Arc::new(Recorder::default())).unwrap();
        assert_eq!(state.view().layout, ViewMode::Tiles);
        assert_eq!(state.variant(), PageVariant::Progress);
    }

    #[test]
    fn test_activation_opens_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = Arc::new(Recorder::default());
        let mut state =
            AppState::from_config(&config(&dir, PageVariant::Progress), recorder.clone()).unwrap();

        let outcome = state.activate_demo("ai-image-generation");
        assert!(matches!(outcome, Activation::Opened(_)));
        assert_eq!(
            recorder.opened.lock().as_slice(),
            ["https://acolyte-image-demo.vercel.app/".to_string()]
        );

        let reopened =
            AppState::from_config(&config(&dir, PageVariant::Progress), recorder).unwrap();
        assert_eq!(reopened.view().progress.map(|p| p.visited), Some(1));
    }

    #[test]
    fn test_reset_progress_flag() {
        let dir = tempfile::tempdir().unwrap();
        FileSettingsStore::open(dir.path())
            .unwrap()
            .set(acolyte_catalog::VISITED_DEMOS_KEY, r#"["video-creation"]"#)
            .unwrap();

        let config = SandboxConfig {
            reset_progress: true,
            ..config(&dir, PageVariant::Progress)
        };
        let state = AppState::from_config(&config, Arc::new(Recorder::default())).unwrap();
        assert_eq!(state.view().progress.map(|p| p.visited), Some(0));
    }

    #[test]
    fn test_open_failure_sets_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut state =
            AppState::from_config(&config(&dir, PageVariant::Progress), Arc::new(NoBrowser))
                .unwrap();

        state.activate_demo("realtime-persona");
        assert!(state.open_error.as_deref().unwrap().contains("no browser found"));

        state.clear_open_error();
        assert!(state.open_error.is_none());
    }

    #[test]
    fn test_category_selection_changes_action() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::from_config(
            &config(&dir, PageVariant::Categories),
            Arc::new(Recorder::default()),
        )
        .unwrap();

        state.select_category("video-creation", "Marketing");
        let view = state.view();
        let card = view.cards.iter().find(|c| c.id == "video-creation").unwrap();
        assert_eq!(card.action.label(), "Coming Soon");
        assert_eq!(state.activate_demo("video-creation"), Activation::Disabled);
    }

    #[test]
    fn test_state_can_seed_launch_context() {
        let dir = tempfile::tempdir().unwrap();
        let state =
            AppState::from_config(&config(&dir, PageVariant::Progress), Arc::new(NoBrowser))
                .unwrap();
        launch_context(&state);

        let mut copy = state.clone();
        copy.session.record_visit("video-creation");
        assert_eq!(state.session.tracker().unwrap().visited_count(), 0);
        assert_eq!(copy.session.tracker().unwrap().visited_count(), 1);
    }
}
