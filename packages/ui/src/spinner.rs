//! Full-page loading state.

use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-overlay",
            div { class: "spinner" }
            p { class: "spinner-label", "{label}" }
        }
    }
}
