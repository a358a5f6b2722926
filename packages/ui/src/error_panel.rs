//! Full-page error state with a manual retry.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaTriangleExclamation;
use crate::Icon;

#[component]
pub fn ErrorPanel(
    title: String,
    message: String,
    #[props(default = "Try Again".to_string())] retry_label: String,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "error-overlay",
            div {
                class: "error-panel",
                span { class: "error-icon", Icon { icon: FaTriangleExclamation, width: 28, height: 28 } }
                h2 { class: "error-title", "{title}" }
                p { class: "error-message", "{message}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_retry.call(()),
                    "{retry_label}"
                }
            }
        }
    }
}
