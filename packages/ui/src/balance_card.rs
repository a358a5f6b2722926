//! Wallet balance card with a visibility toggle.
//!
//! The balance renders masked until the user reveals it; a missing balance
//! (fetch failed) shows a placeholder instead of a number.

use dioxus::prelude::*;

use crate::format::format_amount;
use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

#[component]
pub fn BalanceCard(balance: Option<f64>, #[props(default = false)] initially_visible: bool) -> Element {
    let mut visible = use_signal(|| initially_visible);

    rsx! {
        div {
            class: "balance-card",
            p { class: "balance-label", "Available Balance" }
            div {
                class: "balance-row",
                p {
                    class: "balance-value",
                    match (visible(), balance) {
                        (true, Some(b)) => format!("${}", format_amount(b)),
                        (true, None) => "—".to_string(),
                        (false, _) => "••••••••".to_string(),
                    }
                }
                button {
                    class: "balance-toggle",
                    title: if visible() { "Hide balance" } else { "Show balance" },
                    onclick: move |_| visible.set(!visible()),
                    if visible() {
                        Icon { icon: FaEyeSlash, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
