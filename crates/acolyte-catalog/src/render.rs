//! Catalog renderer
//!
//! Turns the catalog plus session state into plain view models. The desktop
//! app draws these directly, which keeps every decision about what a card
//! shows (media kind, badge or selector, action label) out of the UI layer
//! and testable here.

use std::path::PathBuf;

use tracing::warn;

use crate::catalog::Catalog;
use crate::record::{DemoRecord, Destination, Media, ShowcaseLabel};
use crate::selector::{CategorySelector, DemoAction};
use crate::tracker::{ProgressSummary, VisitTracker};
use crate::view_mode::ViewMode;

/// Resolves record media against the asset directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaResolver {
    asset_root: Option<PathBuf>,
}

impl MediaResolver {
    /// Resolver that trusts every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that substitutes the placeholder for files missing under
    /// `root`.
    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: Some(root.into()),
        }
    }

    pub fn resolve(&self, record: &DemoRecord) -> Media {
        let media = record.media();
        if let Some(root) = &self.asset_root
            && !record.image.is_empty()
        {
            let file = root.join(record.image.trim_start_matches('/'));
            if !file.is_file() {
                warn!(demo = %record.id, path = %file.display(), "Missing demo asset, using placeholder");
                return Media::placeholder();
            }
        }
        media
    }
}

/// Category area of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryControl {
    /// A read-only category badge.
    Badge(String),
    /// A dropdown of the record's categories.
    Selector {
        options: Vec<String>,
        selected: String,
    },
}

/// Everything needed to draw one card or tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub media: Media,
    pub showcase: Option<ShowcaseLabel>,
    pub category: CategoryControl,
    pub features: Vec<String>,
    pub action: DemoAction,
    pub visited: bool,
}

/// The rendered catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub layout: ViewMode,
    pub cards: Vec<CardModel>,
    /// Present when visits are tracked.
    pub progress: Option<ProgressSummary>,
}

/// Builds the view of `catalog` for the given layout and session state.
pub fn render_catalog(
    catalog: &Catalog,
    layout: ViewMode,
    tracker: Option<&VisitTracker>,
    selector: Option<&CategorySelector>,
    media: &MediaResolver,
) -> CatalogView {
    let cards = catalog
        .iter()
        .map(|record| render_card(record, tracker, selector, media))
        .collect();

    CatalogView {
        layout,
        cards,
        progress: tracker.map(VisitTracker::summary),
    }
}

fn render_card(
    record: &DemoRecord,
    tracker: Option<&VisitTracker>,
    selector: Option<&CategorySelector>,
    media: &MediaResolver,
) -> CardModel {
    let effective = selector
        .and_then(|s| s.effective_category(&record.id))
        .or_else(|| record.first_category())
        .unwrap_or_default()
        .to_string();

    let category = match selector {
        Some(_) if record.links.len() > 1 => CategoryControl::Selector {
            options: record.categories().map(str::to_string).collect(),
            selected: effective.clone(),
        },
        _ => CategoryControl::Badge(effective.clone()),
    };

    let destination = record
        .destination_for(&effective)
        .cloned()
        .unwrap_or(Destination::ComingSoon);

    CardModel {
        id: record.id.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        media: media.resolve(record),
        showcase: record.showcase.clone(),
        category,
        features: record.features.clone(),
        action: DemoAction::new(destination),
        visited: tracker.is_some_and(|t| t.is_visited(&record.id)),
    }
}
