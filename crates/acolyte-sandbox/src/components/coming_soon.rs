//! Teaser section for tools that are not in the catalog yet.

use dioxus::prelude::*;

use crate::theme::Accent;

/// Upcoming areas: (title, blurb, accent).
const UPCOMING: [(&str, &str, Accent); 3] = [
    (
        "Analytics & Reporting",
        "Advanced data visualization and business intelligence tools",
        Accent::Blue,
    ),
    (
        "Language Processing",
        "Natural language understanding and text analysis solutions",
        Accent::Green,
    ),
    (
        "Workflow Automation",
        "Intelligent process automation and integration platforms",
        Accent::Purple,
    ),
];

/// "More AI Tools Coming Soon" section.
#[component]
pub fn ComingSoonSection() -> Element {
    rsx! {
        section {
            class: "coming-soon",
            h3 { class: "coming-soon-title", "More AI Tools Coming Soon" }
            p {
                class: "coming-soon-text",
                "We're continuously exploring and evaluating the latest AI technologies to bring you cutting-edge solutions. Our team is working on integrating new tools for natural language processing, computer vision, automation, and advanced analytics that will revolutionize how we work and innovate."
            }
            div {
                class: "coming-soon-grid",
                for (title, blurb, accent) in UPCOMING {
                    div {
                        key: "{title}",
                        class: "coming-soon-item",
                        div { class: "coming-soon-item-title {accent.text_class()}", "{title}" }
                        div { class: "coming-soon-item-text", "{blurb}" }
                    }
                }
            }
            div {
                class: "coming-soon-footnote",
                "Stay tuned for updates as we continue to expand our AI technology showcase"
            }
        }
    }
}
