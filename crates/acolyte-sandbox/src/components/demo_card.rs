//! Demo cards and tiles.

use acolyte_catalog::{CardModel, CategoryControl, Media, PLACEHOLDER_IMAGE, ViewMode};
use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::Accent;

/// The catalog in the current layout.
#[component]
pub fn CatalogGrid(state: Signal<AppState>) -> Element {
    let view = state.read().view();
    let layout = view.layout;

    rsx! {
        section {
            class: "catalog catalog-{layout}",
            for card in view.cards {
                DemoCard {
                    key: "{card.id}",
                    card: card.clone(),
                    layout,
                    state,
                }
            }
        }
    }
}

/// One demo, drawn as a card or a tile.
#[component]
pub fn DemoCard(card: CardModel, layout: ViewMode, state: Signal<AppState>) -> Element {
    let class = if card.visited {
        "demo-card demo-card-visited"
    } else {
        "demo-card"
    };

    rsx! {
        article {
            class: "{class} demo-{layout}",

            if card.visited {
                span { class: "visited-mark", title: "Visited", "✓" }
            }

            {match layout {
                ViewMode::Cards => rsx! {
                    DemoMediaFrame { card: card.clone() }
                    div {
                        class: "demo-body",
                        CategoryArea { card: card.clone(), state }
                        h3 { class: "demo-title", "{card.title}" }
                        p { class: "demo-description", "{card.description}" }
                        FeatureList { features: card.features.clone() }
                        ActionButton { card: card.clone(), state }
                    }
                },
                ViewMode::Tiles => rsx! {
                    div {
                        class: "tile-row",
                        DemoMediaFrame { card: card.clone() }
                        div {
                            class: "tile-body",
                            div {
                                class: "tile-heading",
                                CategoryArea { card: card.clone(), state }
                                h3 { class: "demo-title", "{card.title}" }
                            }
                            p { class: "demo-description", "{card.description}" }
                            FeatureList { features: card.features.clone() }
                            div {
                                class: "tile-actions",
                                ActionButton { card: card.clone(), state }
                            }
                        }
                    }
                },
            }}
        }
    }
}

/// Media area with the showcase badge on top.
#[component]
fn DemoMediaFrame(card: CardModel) -> Element {
    rsx! {
        div {
            class: "demo-media",
            DemoMedia { media: card.media.clone(), title: card.title.clone() }
            if let Some(showcase) = card.showcase.as_ref() {
                span {
                    class: Accent::for_showcase(showcase).badge_class(),
                    "{showcase.display_name()}"
                }
            }
        }
    }
}

/// Image or silent looping video; broken images swap to the placeholder.
#[component]
fn DemoMedia(media: Media, title: String) -> Element {
    let mut broken = use_signal(|| false);

    match media {
        Media::Video { src } => rsx! {
            video {
                class: "demo-media-content",
                src: "{src}",
                muted: true,
                autoplay: true,
                r#loop: true,
                playsinline: true,
                "disablepictureinpicture": "true",
            }
        },
        Media::Image { src } => {
            let src = if broken() { PLACEHOLDER_IMAGE.to_string() } else { src };
            let failed_title = title.clone();
            rsx! {
                img {
                    class: "demo-media-content",
                    src: "{src}",
                    alt: "{title}",
                    onerror: move |_| {
                        if !broken() {
                            tracing::warn!("Image failed to load for {}, using placeholder", failed_title);
                            broken.set(true);
                        }
                    },
                }
            }
        }
    }
}

/// Category badge, or a dropdown when the card offers several categories.
#[component]
fn CategoryArea(card: CardModel, state: Signal<AppState>) -> Element {
    match card.category {
        CategoryControl::Badge(tag) => rsx! {
            span { class: "category-badge", "{tag}" }
        },
        CategoryControl::Selector { options, selected } => {
            let mut state_write = state;
            let demo_id = card.id.clone();
            rsx! {
                select {
                    class: "category-select",
                    "aria-label": "Category for {card.title}",
                    value: "{selected}",
                    onchange: move |evt| {
                        state_write.write().select_category(&demo_id, &evt.value());
                    },
                    for tag in options {
                        option {
                            key: "{tag}",
                            value: "{tag}",
                            selected: tag == selected,
                            "{tag}"
                        }
                    }
                }
            }
        }
    }
}

/// Bulleted feature list.
#[component]
fn FeatureList(features: Vec<String>) -> Element {
    rsx! {
        ul {
            class: "feature-list",
            for (idx, feature) in features.iter().enumerate() {
                li {
                    key: "{idx}",
                    class: "feature-item",
                    "{feature}"
                }
            }
        }
    }
}

/// "View Demo" / "Coming Soon" control.
#[component]
fn ActionButton(card: CardModel, state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let disabled = card.action.is_disabled();
    let label = card.action.label();
    let demo_id = card.id.clone();

    rsx! {
        button {
            class: if disabled { "action-btn action-btn-disabled" } else { "action-btn" },
            disabled: disabled,
            title: card.action.href().unwrap_or_default(),
            onclick: move |_| {
                state_write.write().activate_demo(&demo_id);
            },
            "{label}"
            if !disabled {
                span { class: "external-icon", "↗" }
            }
        }
    }
}
