//! Showcase accent palette.
//!
//! Every colored element on the page (legend dots, showcase badges, the
//! coming-soon headings, the header gradient) takes its color from
//! [`Accent`]. The matching CSS is generated by [`palette_css`] and injected
//! next to the static stylesheet, so the palette has a single definition.

use std::fmt::Write;

use acolyte_catalog::ShowcaseLabel;

/// Named accent colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Blue,
    Orange,
    Green,
    Gray,
}

/// The shades one accent is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    /// Legend dots and gradients
    pub solid: &'static str,
    /// Badge background
    pub tint: &'static str,
    /// Badge text
    pub ink: &'static str,
    /// Badge border
    pub edge: &'static str,
    /// Headings on the dark coming-soon panel
    pub glow: &'static str,
}

impl Accent {
    pub const ALL: [Accent; 5] = [
        Accent::Purple,
        Accent::Blue,
        Accent::Orange,
        Accent::Green,
        Accent::Gray,
    ];

    /// Picks the badge color for a showcase label. Unrecognized labels are gray.
    pub fn for_showcase(label: &ShowcaseLabel) -> Self {
        match label {
            ShowcaseLabel::FeaturedTechnology => Accent::Purple,
            ShowcaseLabel::NewIntegration => Accent::Blue,
            ShowcaseLabel::TrendingSolution => Accent::Orange,
            ShowcaseLabel::NewTechnology => Accent::Green,
            ShowcaseLabel::Other(_) => Accent::Gray,
        }
    }

    /// Class suffix, as in `badge-purple`.
    pub fn name(self) -> &'static str {
        match self {
            Accent::Purple => "purple",
            Accent::Blue => "blue",
            Accent::Orange => "orange",
            Accent::Green => "green",
            Accent::Gray => "gray",
        }
    }

    pub fn swatch(self) -> Swatch {
        match self {
            Accent::Purple => Swatch {
                solid: "#9333ea",
                tint: "#f3e8ff",
                ink: "#6b21a8",
                edge: "#e9d5ff",
                glow: "#d8b4fe",
            },
            Accent::Blue => Swatch {
                solid: "#2563eb",
                tint: "#dbeafe",
                ink: "#1e40af",
                edge: "#bfdbfe",
                glow: "#93c5fd",
            },
            Accent::Orange => Swatch {
                solid: "#ea580c",
                tint: "#ffedd5",
                ink: "#9a3412",
                edge: "#fed7aa",
                glow: "#fdba74",
            },
            Accent::Green => Swatch {
                solid: "#16a34a",
                tint: "#dcfce7",
                ink: "#166534",
                edge: "#bbf7d0",
                glow: "#86efac",
            },
            Accent::Gray => Swatch {
                solid: "#6b7280",
                tint: "#f3f4f6",
                ink: "#1f2937",
                edge: "#e5e7eb",
                glow: "#d1d5db",
            },
        }
    }

    pub fn dot_class(self) -> String {
        format!("legend-dot dot-{}", self.name())
    }

    pub fn badge_class(self) -> String {
        format!("showcase-badge badge-{}", self.name())
    }

    pub fn text_class(self) -> String {
        format!("text-{}", self.name())
    }
}

/// CSS for every accent: custom properties on the page root plus the
/// `dot-*`, `badge-*` and `text-*` rules.
pub fn palette_css() -> String {
    let mut css = String::from(".sandbox {\n");
    for accent in Accent::ALL {
        // Writing to a String cannot fail
        let _ = writeln!(css, "  --{}: {};", accent.name(), accent.swatch().solid);
    }
    css.push_str("}\n");

    for accent in Accent::ALL {
        let name = accent.name();
        let swatch = accent.swatch();
        let _ = writeln!(css, ".dot-{name} {{ background: var(--{name}); }}");
        let _ = writeln!(
            css,
            ".badge-{name} {{ background: {}; color: {}; border-color: {}; }}",
            swatch.tint, swatch.ink, swatch.edge
        );
        let _ = writeln!(css, ".text-{name} {{ color: {}; }}", swatch.glow);
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_labels_map_to_accents() {
        assert_eq!(
            Accent::for_showcase(&ShowcaseLabel::FeaturedTechnology),
            Accent::Purple
        );
        assert_eq!(
            Accent::for_showcase(&ShowcaseLabel::NewIntegration),
            Accent::Blue
        );
        assert_eq!(
            Accent::for_showcase(&ShowcaseLabel::TrendingSolution),
            Accent::Orange
        );
        assert_eq!(
            Accent::for_showcase(&ShowcaseLabel::NewTechnology),
            Accent::Green
        );
        assert_eq!(
            Accent::for_showcase(&ShowcaseLabel::Other("Beta".into())),
            Accent::Gray
        );
    }

    #[test]
    fn test_legend_accents_are_distinct() {
        let names: Vec<_> = ShowcaseLabel::LEGEND
            .iter()
            .map(|label| Accent::for_showcase(label).name())
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
        assert!(!names.contains(&"gray"));
    }

    #[test]
    fn test_palette_css_covers_every_class() {
        let css = palette_css();
        for accent in Accent::ALL {
            let name = accent.name();
            let swatch = accent.swatch();
            assert!(css.contains(&format!("--{name}: {};", swatch.solid)));
            assert!(css.contains(&format!(".dot-{name} ")));
            assert!(css.contains(&format!(
                ".badge-{name} {{ background: {}; color: {}; border-color: {}; }}",
                swatch.tint, swatch.ink, swatch.edge
            )));
            assert!(css.contains(&format!(".text-{name} {{ color: {}; }}", swatch.glow)));
        }
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Accent::Blue.dot_class(), "legend-dot dot-blue");
        assert_eq!(Accent::Orange.badge_class(), "showcase-badge badge-orange");
        assert_eq!(Accent::Green.text_class(), "text-green");
    }
}
