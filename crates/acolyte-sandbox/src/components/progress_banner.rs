//! Learning-journey banner showing demo exploration progress.

use acolyte_catalog::ProgressSummary;
use dioxus::prelude::*;

/// Progress banner.
#[component]
pub fn ProgressBanner(summary: ProgressSummary) -> Element {
    let percentage = summary.percentage;

    rsx! {
        section {
            class: "progress-banner",

            div {
                class: "progress-intro",
                h2 { class: "progress-title", "Your Learning Journey" }
                p {
                    class: "progress-subtitle",
                    "Track your progress as you explore our AI technology showcase and expand your knowledge of cutting-edge solutions."
                }
            }

            div {
                class: "progress-stats",

                ProgressStat {
                    icon: "◎".to_string(),
                    label: "Exploration Progress".to_string(),
                    value: summary.explored_text(),
                }
                ProgressStat {
                    icon: "↗".to_string(),
                    label: "Knowledge Gained".to_string(),
                    value: summary.knowledge_text(),
                }
                ProgressStat {
                    icon: "★".to_string(),
                    label: "Achievement Level".to_string(),
                    value: summary.level.label().to_string(),
                }
            }

            div {
                class: "progress-completion",

                div {
                    class: "completion-text",
                    span { class: "completion-label", "Overall Completion" }
                    span { class: "completion-hint", "Keep exploring to unlock more insights" }
                }

                div {
                    class: "completion-meter",
                    span { class: "completion-value", "{percentage}%" }
                    div {
                        class: "completion-track",
                        div {
                            class: "completion-fill",
                            style: "width: {percentage}%",
                        }
                    }
                }
            }
        }
    }
}

/// One column of the banner.
#[component]
fn ProgressStat(icon: String, label: String, value: String) -> Element {
    rsx! {
        div {
            class: "progress-stat",
            span { class: "progress-stat-icon", "{icon}" }
            span { class: "progress-stat-label", "{label}" }
            span { class: "progress-stat-value", "{value}" }
        }
    }
}
