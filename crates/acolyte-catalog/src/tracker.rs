//! Visited-demo progress tracking
//!
//! Every outbound demo click adds the demo id to a set. The set is written
//! through the [`SettingsStore`] after each change and read back at startup,
//! so progress survives restarts. Storage trouble never blocks the page: a
//! failed read starts from an empty set and a failed write only costs
//! durability.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::SettingsError;
use crate::settings::SettingsStore;

/// Settings key holding the visited-demo list.
pub const VISITED_DEMOS_KEY: &str = "acolyte-visited-demos";

/// Qualitative progress label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AchievementLevel {
    /// Nothing explored yet (0%).
    Beginner,
    /// Below half.
    Explorer,
    /// Half or more, not complete.
    Advanced,
    /// 100%.
    Expert,
}

impl AchievementLevel {
    /// Maps a completion percentage to a level.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => AchievementLevel::Beginner,
            1..=49 => AchievementLevel::Explorer,
            50..=99 => AchievementLevel::Advanced,
            _ => AchievementLevel::Expert,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AchievementLevel::Beginner => "Beginner",
            AchievementLevel::Explorer => "Explorer",
            AchievementLevel::Advanced => "Advanced",
            AchievementLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `round(100 * visited / total)`, halves rounding up.
///
/// `visited` is capped at `total`; an empty catalog reports 0.
pub fn completion_percentage(visited: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let visited = visited.min(total);
    ((200 * visited + total) / (2 * total)) as u8
}

/// Encodes the visited set as a JSON array of ids.
pub fn encode_visited(visited: &BTreeSet<String>) -> Result<String, SettingsError> {
    serde_json::to_string(visited).map_err(|e| SettingsError::serialization(e.to_string()))
}

/// Decodes a JSON array of ids; duplicates collapse.
pub fn decode_visited(raw: &str) -> Result<BTreeSet<String>, SettingsError> {
    serde_json::from_str(raw).map_err(|e| SettingsError::deserialization(e.to_string()))
}

/// Snapshot of progress for the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub visited: usize,
    pub total: usize,
    pub percentage: u8,
    pub level: AchievementLevel,
}

impl ProgressSummary {
    pub fn new(visited: usize, total: usize) -> Self {
        let percentage = completion_percentage(visited, total);
        Self {
            visited,
            total,
            percentage,
            level: AchievementLevel::from_percentage(percentage),
        }
    }

    /// "`n` of `total` demos explored"
    pub fn explored_text(&self) -> String {
        format!("{} of {} demos explored", self.visited, self.total)
    }

    /// Knowledge line shown under "Knowledge Gained".
    pub fn knowledge_text(&self) -> String {
        match self.visited {
            0 => "Ready to start learning".to_string(),
            1 => "1 technology area mastered".to_string(),
            n => format!("{} technology areas mastered", n),
        }
    }
}

/// The set of demos the user has opened.
#[derive(Debug, Clone)]
pub struct VisitTracker {
    catalog: Arc<Catalog>,
    store: Arc<dyn SettingsStore>,
    visited: BTreeSet<String>,
}

impl VisitTracker {
    /// Loads the persisted set, falling back to empty.
    ///
    /// Ids that are not in `catalog` are dropped.
    pub fn load(catalog: Arc<Catalog>, store: Arc<dyn SettingsStore>) -> Self {
        let visited = match store.get(VISITED_DEMOS_KEY) {
            Ok(Some(raw)) => match decode_visited(&raw) {
                Ok(ids) => {
                    let total = ids.len();
                    let known: BTreeSet<String> =
                        ids.into_iter().filter(|id| catalog.contains(id)).collect();
                    if known.len() < total {
                        debug!(
                            dropped = total - known.len(),
                            "Ignoring persisted visits for unknown demos"
                        );
                    }
                    known
                }
                Err(e) => {
                    warn!(error = %e, "Persisted progress is unreadable, starting fresh");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                warn!(error = %e, "Could not read persisted progress, starting fresh");
                BTreeSet::new()
            }
        };

        debug!(visited = visited.len(), total = catalog.len(), "Loaded visit tracker");

        Self {
            catalog,
            store,
            visited,
        }
    }

    /// Marks a demo as visited.
    ///
    /// Returns `true` only when the id was new. Unknown ids are ignored.
    pub fn record_visit(&mut self, id: &str) -> bool {
        if !self.catalog.contains(id) {
            debug!(demo = id, "Ignoring visit to unknown demo");
            return false;
        }
        if !self.visited.insert(id.to_string()) {
            return false;
        }

        debug!(demo = id, visited = self.visited.len(), "Recorded demo visit");
        self.persist();
        true
    }

    /// Forgets every visit and persists the empty set.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.persist();
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn visited(&self) -> &BTreeSet<String> {
        &self.visited
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn completion_percentage(&self) -> u8 {
        completion_percentage(self.visited.len(), self.catalog.len())
    }

    pub fn achievement_level(&self) -> AchievementLevel {
        AchievementLevel::from_percentage(self.completion_percentage())
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::new(self.visited.len(), self.catalog.len())
    }

    fn persist(&self) {
        let result =
            encode_visited(&self.visited).and_then(|raw| self.store.set(VISITED_DEMOS_KEY, &raw));
        if let Err(e) = result {
            warn!(error = %e, "Progress not persisted");
        }
    }
}
