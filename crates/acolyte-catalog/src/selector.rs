//! Per-card category selection.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::record::Destination;

/// Label of an enabled action control.
pub const VIEW_DEMO_LABEL: &str = "View Demo";

/// Label of a disabled action control.
pub const COMING_SOON_LABEL: &str = "Coming Soon";

/// The "View Demo" control of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAction {
    pub destination: Destination,
}

impl DemoAction {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }

    /// Disabled exactly when the destination is the "coming soon" sentinel.
    pub fn is_disabled(&self) -> bool {
        self.destination.is_coming_soon()
    }

    pub fn label(&self) -> &'static str {
        if self.is_disabled() {
            COMING_SOON_LABEL
        } else {
            VIEW_DEMO_LABEL
        }
    }

    /// URL opened on activation, `None` while disabled.
    pub fn href(&self) -> Option<&str> {
        self.destination.url()
    }
}

/// Chosen category per demo; unselected demos use their first category.
#[derive(Debug, Clone)]
pub struct CategorySelector {
    catalog: Arc<Catalog>,
    selected: HashMap<String, String>,
}

impl CategorySelector {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selected: HashMap::new(),
        }
    }

    /// Chooses `tag` for `demo_id`.
    ///
    /// Unknown demos and tags the demo does not offer leave the state
    /// untouched and return `false`.
    pub fn select_category(&mut self, demo_id: &str, tag: &str) -> bool {
        let Some(record) = self.catalog.get(demo_id) else {
            debug!(demo = demo_id, "Ignoring category selection for unknown demo");
            return false;
        };
        if !record.has_category(tag) {
            debug!(demo = demo_id, tag, "Ignoring category the demo does not offer");
            return false;
        }

        debug!(demo = demo_id, tag, "Selected category");
        self.selected.insert(demo_id.to_string(), tag.to_string());
        true
    }

    /// The chosen category, else the demo's first one.
    pub fn effective_category(&self, demo_id: &str) -> Option<&str> {
        match self.selected.get(demo_id) {
            Some(tag) => Some(tag.as_str()),
            None => self.catalog.get(demo_id)?.first_category(),
        }
    }

    /// Destination for the effective category.
    pub fn resolve_url(&self, demo_id: &str) -> Option<&Destination> {
        let tag = self.effective_category(demo_id)?;
        self.catalog.get(demo_id)?.destination_for(tag)
    }

    /// The action control for a demo.
    pub fn action(&self, demo_id: &str) -> Option<DemoAction> {
        self.resolve_url(demo_id).cloned().map(DemoAction::new)
    }

    #[cfg(test)]
    fn selections(&self) -> &HashMap<String, String> {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DemoRecord;

    fn selector() -> CategorySelector {
        let catalog = Catalog::new(vec![
            DemoRecord::new("persona", "Persona", "")
                .with_link("Intake", Destination::live("https://intake.example.com"))
                .with_link("Sales", Destination::live("https://sales.example.com"))
                .with_link("Support", Destination::ComingSoon),
            DemoRecord::new("soon", "Soon", "").with_link("Any", Destination::ComingSoon),
        ])
        .unwrap();
        CategorySelector::new(Arc::new(catalog))
    }

    #[test]
    fn test_defaults_to_first_category() {
        let selector = selector();
        assert_eq!(selector.effective_category("persona"), Some("Intake"));
        assert_eq!(
            selector.resolve_url("persona"),
            Some(&Destination::live("https://intake.example.com"))
        );
    }

    #[test]
    fn test_selection_is_last_write_wins() {
        let mut selector = selector();
        assert!(selector.select_category("persona", "Support"));
        assert!(selector.select_category("persona", "Sales"));
        assert_eq!(
            selector.resolve_url("persona").and_then(Destination::url),
            Some("https://sales.example.com")
        );
    }

    #[test]
    fn test_coming_soon_disables_action() {
        let mut selector = selector();
        selector.select_category("persona", "Support");
        let action = selector.action("persona").unwrap();
        assert!(action.is_disabled());
        assert_eq!(action.label(), "Coming Soon");
        assert_eq!(action.href(), None);

        let action = selector.action("soon").unwrap();
        assert!(action.is_disabled());
    }

    #[test]
    fn test_live_action_is_enabled() {
        let action = selector().action("persona").unwrap();
        assert!(!action.is_disabled());
        assert_eq!(action.label(), "View Demo");
        assert_eq!(action.href(), Some("https://intake.example.com"));
    }

    #[test]
    fn test_invalid_selections_are_ignored() {
        let mut selector = selector();
        selector.select_category("persona", "Sales");
        assert!(!selector.select_category("persona", "Marketing"));
        assert!(!selector.select_category("missing", "Intake"));
        assert_eq!(selector.effective_category("persona"), Some("Sales"));
        assert_eq!(selector.selections().len(), 1);
        assert_eq!(selector.resolve_url("missing"), None);
    }
}
