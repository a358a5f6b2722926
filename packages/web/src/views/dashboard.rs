//! Authenticated home: balance, quick actions, people, recent activity.

use api::query::{sort_transactions, SortBy, SortOrder};
use api::{Contact, Transaction};
use dioxus::prelude::*;
use ui::icons::{FaClockRotateLeft, FaPaperPlane, FaUserGroup, FaWallet};
use ui::{
    make_client, use_session, BalanceCard, DashboardHeader, ErrorPanel, Icon, Spinner,
    TransactionItem,
};

use crate::views::use_require_auth;
use crate::Route;

const RECENT_LIMIT: usize = 5;
const PEOPLE_LIMIT: usize = 6;

#[component]
pub fn Dashboard() -> Element {
    use_require_auth();
    let session = use_session();
    let nav = use_navigator();

    let mut balance = use_signal(|| Option::<f64>::None);
    let mut contacts = use_signal(Vec::<Contact>::new);
    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);

    let mut loader = use_resource(move || async move {
        loaded.set(false);
        load_error.set(None);
        let client = make_client();

        match client.transactions().await {
            Ok(mut list) => {
                sort_transactions(&mut list, SortBy::Date, SortOrder::Desc);
                transactions.set(list);
            }
            Err(e) => {
                load_error.set(Some(e.to_string()));
                loaded.set(true);
                return;
            }
        }
        match client.contacts().await {
            Ok(list) => contacts.set(list),
            Err(e) => {
                load_error.set(Some(e.to_string()));
                loaded.set(true);
                return;
            }
        }
        // A missing balance degrades to a placeholder, not a dead page.
        match client.balance().await {
            Ok(b) => balance.set(Some(b)),
            Err(e) => {
                tracing::warn!("balance fetch failed: {e}");
                balance.set(None);
            }
        }
        loaded.set(true);
    });

    let greeting = session()
        .user
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "dashboard".to_string() }

            if !loaded() {
                Spinner { label: "Loading your wallet...".to_string() }
            } else if let Some(ref message) = load_error() {
                ErrorPanel {
                    title: "Couldn't load your dashboard".to_string(),
                    message: message.clone(),
                    on_retry: move |_| loader.restart(),
                }
            } else {
                main {
                    class: "page-main dashboard-main",

                    div {
                        class: "dashboard-greeting",
                        h1 { "Hey, {greeting}" }
                        p { class: "muted", "Here's what's happening with your money." }
                    }

                    div {
                        class: "dashboard-top",
                        BalanceCard { balance: balance(), initially_visible: true }

                        div {
                            class: "quick-actions",
                            button {
                                class: "quick-action",
                                onclick: move |_| { nav.push(Route::Send { to: String::new() }); },
                                Icon { icon: FaPaperPlane, width: 18, height: 18 }
                                span { "Send" }
                            }
                            button {
                                class: "quick-action",
                                onclick: move |_| { nav.push(Route::TopUp {}); },
                                Icon { icon: FaWallet, width: 18, height: 18 }
                                span { "Top Up" }
                            }
                            button {
                                class: "quick-action",
                                onclick: move |_| { nav.push(Route::Contacts {}); },
                                Icon { icon: FaUserGroup, width: 18, height: 18 }
                                span { "Contacts" }
                            }
                            button {
                                class: "quick-action",
                                onclick: move |_| { nav.push(Route::Transactions {}); },
                                Icon { icon: FaClockRotateLeft, width: 18, height: 18 }
                                span { "History" }
                            }
                        }
                    }

                    if !contacts().is_empty() {
                        section {
                            class: "dashboard-section",
                            div {
                                class: "section-head",
                                h2 { "People" }
                                a { class: "section-link", href: "/contacts", "See all" }
                            }
                            div {
                                class: "people-strip",
                                for contact in contacts().into_iter().take(PEOPLE_LIMIT) {
                                    button {
                                        key: "{contact.id}",
                                        class: "person-chip",
                                        onclick: {
                                            let upi = contact.upi_id.clone();
                                            move |_| { nav.push(Route::Send { to: upi.clone() }); }
                                        },
                                        span { class: "person-avatar", "{contact.initials()}" }
                                        span { class: "person-name", "{contact.name}" }
                                    }
                                }
                            }
                        }
                    }

                    section {
                        class: "dashboard-section",
                        div {
                            class: "section-head",
                            h2 { "Recent activity" }
                            a { class: "section-link", href: "/transactions", "View all" }
                        }
                        if transactions().is_empty() {
                            p { class: "empty-note", "No transactions yet. Send money or top up to get started." }
                        } else {
                            div {
                                class: "transaction-list",
                                for tx in transactions().into_iter().take(RECENT_LIMIT) {
                                    TransactionItem {
                                        key: "{tx.id}",
                                        transaction: tx,
                                        on_select: move |id: String| {
                                            nav.push(Route::TransactionDetail { transaction_id: id });
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
