//! Root application component for the showcase page.

use dioxus::prelude::*;

use crate::state::AppState;

use super::{CatalogGrid, ComingSoonSection, Footer, Header, ProgressBanner, ViewToggle};

/// Root application component.
#[component]
pub fn App(state: Signal<AppState>) -> Element {
    let state_read = state.read();
    let variant = state_read.variant();
    let progress = state_read.session.tracker().map(|t| t.summary());

    rsx! {
        div {
            class: "sandbox",

            Header { variant }

            if let Some(summary) = progress {
                ProgressBanner { summary }
            }

            main {
                class: "main-content",

                ViewToggle { state }
                OpenErrorNotice { state }
                CatalogGrid { state }
                ComingSoonSection {}
            }

            Footer {}
        }
    }
}

/// Notice shown when the browser could not be launched.
#[component]
fn OpenErrorNotice(state: Signal<AppState>) -> Element {
    let mut state_write = state;
    let Some(message) = state.read().open_error.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "open-error",
            role: "alert",
            span { class: "open-error-text", "{message}" }
            button {
                class: "open-error-dismiss",
                onclick: move |_| state_write.write().clear_open_error(),
                "✕"
            }
        }
    }
}
