//! First-run walkthrough shown right after signup.
//!
//! Three slides, skippable at any point. Finishing (or skipping) records the
//! completion flag so the walkthrough never comes back on this device.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::icons::{FaClockRotateLeft, FaPaperPlane, FaWallet};
use ui::{make_client, Icon};

use crate::views::use_require_auth;
use crate::Route;

const SLIDES: [(&str, &str); 3] = [
    (
        "Send money in seconds",
        "Pick a contact or type any NeonPay handle, review the transfer, and confirm. Done.",
    ),
    (
        "Top up your wallet",
        "Add money from your card through our payment partner whenever your balance runs low.",
    ),
    (
        "Every payment, on record",
        "Search, filter, and sort your full history. Tap any entry for the complete receipt.",
    ),
];

#[component]
pub fn Onboarding() -> Element {
    use_require_auth();
    let nav = use_navigator();
    let mut slide = use_signal(|| 0usize);

    let finish = move |_| {
        make_client().session().set_onboarding_completed();
        nav.replace(Route::Dashboard {});
    };

    let current = slide();
    let last = current + 1 == SLIDES.len();

    let icon = match current {
        0 => rsx! { Icon { icon: FaPaperPlane, width: 28, height: 28 } },
        1 => rsx! { Icon { icon: FaWallet, width: 28, height: 28 } },
        _ => rsx! { Icon { icon: FaClockRotateLeft, width: 28, height: 28 } },
    };

    rsx! {
        div {
            class: "onboarding-page",
            div {
                class: "onboarding-card",
                span { class: "onboarding-icon", {icon} }
                h1 { class: "onboarding-title", "{SLIDES[current].0}" }
                p { class: "onboarding-text", "{SLIDES[current].1}" }

                div {
                    class: "onboarding-dots",
                    for i in 0..SLIDES.len() {
                        span {
                            key: "{i}",
                            class: if i == current { "dot active" } else { "dot" },
                        }
                    }
                }

                div {
                    class: "onboarding-actions",
                    if !last {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: finish,
                            "Skip"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| slide.set(current + 1),
                            "Next"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: finish,
                            "Go to Dashboard"
                        }
                    }
                }
            }
        }
    }
}
