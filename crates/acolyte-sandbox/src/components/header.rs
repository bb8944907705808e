//! Page header with title, tagline and showcase legend.

use acolyte_catalog::{PageVariant, ShowcaseLabel};
use dioxus::prelude::*;

use crate::theme::Accent;

/// Page header.
#[component]
pub fn Header(variant: PageVariant) -> Element {
    rsx! {
        header {
            class: "page-header",

            div {
                class: "page-header-inner",

                h1 {
                    class: "page-title",
                    "Acolyte Sandbox"
                }
                p {
                    class: "page-tagline",
                    "Enterprise-grade artificial intelligence solutions designed for modern businesses. Explore our comprehensive suite of AI technologies that drive innovation, enhance productivity, and deliver measurable results across industries."
                }

                // Badge colors only appear on progress cards
                if variant.tracks_progress() {
                    div {
                        class: "legend",
                        for label in ShowcaseLabel::LEGEND.iter() {
                            div {
                                key: "{label.display_name()}",
                                class: "legend-item",
                                span { class: Accent::for_showcase(label).dot_class() }
                                "{label.display_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
