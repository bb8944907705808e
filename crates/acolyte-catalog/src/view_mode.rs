//! Card/tile layout switch.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Layout used to draw the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Grid of independent cards.
    #[default]
    Cards,
    /// Stacked wide rows, media beside text.
    Tiles,
}

impl ViewMode {
    /// Both modes in toggle order.
    pub const ALL: [ViewMode; 2] = [ViewMode::Cards, ViewMode::Tiles];

    /// Returns the identifier used on the command line and in CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Cards => "cards",
            ViewMode::Tiles => "tiles",
        }
    }

    /// Returns the toggle button label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Cards => "Card View",
            ViewMode::Tiles => "Tile View",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Cards => ViewMode::Tiles,
            ViewMode::Tiles => ViewMode::Cards,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither view mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode `{0}` (expected `cards` or `tiles`)")]
pub struct ParseViewModeError(String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" | "card" => Ok(ViewMode::Cards),
            "tiles" | "tile" => Ok(ViewMode::Tiles),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}
