//! Page footer.

use chrono::Datelike;
use dioxus::prelude::*;

/// Copyright line and attribution.
#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "page-footer",
            p {
                class: "footer-copyright",
                "© {year} Acolyte Sandbox. All rights reserved."
            }
            div {
                class: "footer-powered",
                span { class: "footer-powered-label", "Powered by" }
                span { class: "footer-brand", "Acolyte Health" }
            }
        }
    }
}
