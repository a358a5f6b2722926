//! Public landing page.

use dioxus::prelude::*;
use ui::icons::{FaBolt, FaLock, FaPaperPlane, FaWallet};
use ui::{use_session, Icon};

use crate::Route;

const FEATURES: [(&str, &str); 3] = [
    (
        "Instant transfers",
        "Send money to any NeonPay handle and it lands in seconds, day or night.",
    ),
    (
        "Bank-grade security",
        "Every request is authenticated and every payment is verified server-side.",
    ),
    (
        "One wallet for everything",
        "Top up from your card, track every payment, and keep your contacts close.",
    ),
];

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let signed_in = session().user.is_some();

    rsx! {
        div {
            class: "landing",
            header {
                class: "landing-header",
                div {
                    class: "brand",
                    span { class: "brand-mark", Icon { icon: FaBolt, width: 16, height: 16 } }
                    span { class: "brand-name", "NeonPay" }
                }
                nav {
                    class: "landing-nav",
                    if signed_in {
                        a { class: "nav-link", href: "/dashboard", "Dashboard" }
                    } else {
                        a { class: "nav-link", href: "/login", "Log in" }
                        a { class: "btn btn-primary landing-cta", href: "/signup", "Get Started" }
                    }
                }
            }

            section {
                class: "hero",
                h1 {
                    class: "hero-title",
                    "Payments at the speed of "
                    span { class: "hero-accent", "light" }
                }
                p {
                    class: "hero-subtitle",
                    "Send money, top up your wallet, and track every transaction "
                    "from one neon-bright dashboard."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary hero-button",
                        onclick: move |_| {
                            if signed_in {
                                nav.push(Route::Send { to: String::new() });
                            } else {
                                nav.push(Route::Signup {});
                            }
                        },
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        if signed_in { " Send Money" } else { " Create Free Account" }
                    }
                    button {
                        class: "btn btn-secondary hero-button",
                        onclick: move |_| {
                            if signed_in {
                                nav.push(Route::TopUp {});
                            } else {
                                nav.push(Route::Login {});
                            }
                        },
                        Icon { icon: FaWallet, width: 14, height: 14 }
                        if signed_in { " Top Up Wallet" } else { " I Already Have an Account" }
                    }
                }
            }

            section {
                class: "features",
                div {
                    class: "feature-card",
                    span { class: "feature-icon", Icon { icon: FaBolt, width: 18, height: 18 } }
                    h3 { class: "feature-title", {FEATURES[0].0} }
                    p { class: "feature-blurb", {FEATURES[0].1} }
                }
                div {
                    class: "feature-card",
                    span { class: "feature-icon", Icon { icon: FaLock, width: 18, height: 18 } }
                    h3 { class: "feature-title", {FEATURES[1].0} }
                    p { class: "feature-blurb", {FEATURES[1].1} }
                }
                div {
                    class: "feature-card",
                    span { class: "feature-icon", Icon { icon: FaWallet, width: 18, height: 18 } }
                    h3 { class: "feature-title", {FEATURES[2].0} }
                    p { class: "feature-blurb", {FEATURES[2].1} }
                }
            }

            footer {
                class: "landing-footer",
                p { "NeonPay · move money, stay in control" }
            }
        }
    }
}
