//! Top navigation bar for the authenticated pages.

use dioxus::prelude::*;

use crate::icons::{FaBolt, FaWallet};
use crate::session::use_session;
use crate::{Icon, LogoutButton};

#[component]
pub fn DashboardHeader(#[props(default = "".to_string())] current_page: String) -> Element {
    let session = use_session();

    let link_class = |page: &str| {
        if current_page == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        header {
            class: "dashboard-header",
            a {
                class: "brand",
                href: "/dashboard",
                span { class: "brand-mark", Icon { icon: FaBolt, width: 16, height: 16 } }
                span { class: "brand-name", "NeonPay" }
            }

            nav {
                class: "header-nav",
                a { class: link_class("dashboard"), href: "/dashboard", "Dashboard" }
                a { class: link_class("send"), href: "/send", "Send" }
                a { class: link_class("contacts"), href: "/contacts", "Contacts" }
                a { class: link_class("transactions"), href: "/transactions", "History" }
                a {
                    class: link_class("topup"),
                    href: "/topup",
                    Icon { icon: FaWallet, width: 12, height: 12 }
                    " Top Up"
                }
            }

            div {
                class: "header-user",
                if let Some(ref user) = session().user {
                    a {
                        class: "header-avatar",
                        href: "/profile",
                        title: "{user.display_name()}",
                        "{user.initials()}"
                    }
                }
                LogoutButton { class: "nav-link nav-link--logout" }
            }
        }
    }
}
