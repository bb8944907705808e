//! Card/tile layout toggle.

use acolyte_catalog::ViewMode;
use dioxus::prelude::*;

use crate::state::AppState;

/// Two-button layout switch.
#[component]
pub fn ViewToggle(state: Signal<AppState>) -> Element {
    let current = state.read().session.view_mode();

    rsx! {
        div {
            class: "view-toggle",
            for mode in ViewMode::ALL {
                {
                    let mut state_write = state;
                    let active = mode == current;
                    rsx! {
                        button {
                            key: "{mode}",
                            class: if active { "toggle-btn toggle-btn-active" } else { "toggle-btn" },
                            onclick: move |_| state_write.write().set_view_mode(mode),
                            span {
                                class: "toggle-icon",
                                if mode == ViewMode::Cards { "▦" } else { "☰" }
                            }
                            "{mode.label()}"
                        }
                    }
                }
            }
        }
    }
}
