//! Receipt view for a single transaction.

use api::{ApiError, Transaction};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card};
use ui::icons::{FaArrowDown, FaArrowUp, FaCopy};
use ui::{format_amount, format_datetime, make_client, DashboardHeader, ErrorPanel, Icon, Spinner};

use crate::views::use_require_auth;
use crate::Route;

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Found(Transaction),
    NotFound,
    Error(String),
}

#[component]
pub fn TransactionDetail(transaction_id: String) -> Element {
    use_require_auth();
    let nav = use_navigator();

    let mut state = use_signal(|| DetailState::Loading);
    let mut copied = use_signal(|| false);

    let id_for_fetch = transaction_id.clone();
    let mut loader = use_resource(move || {
        let id = id_for_fetch.clone();
        async move {
            state.set(DetailState::Loading);
            match make_client().transaction(&id).await {
                Ok(tx) => state.set(DetailState::Found(tx)),
                Err(ApiError::Backend { status: 404, .. }) => state.set(DetailState::NotFound),
                Err(e) => state.set(DetailState::Error(e.to_string())),
            }
        }
    });

    let id_for_copy = transaction_id.clone();
    let copy_id = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&id_for_copy);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &id_for_copy;
        copied.set(true);
    };

    let body = match state() {
        DetailState::Loading => rsx! {
            Spinner { label: "Loading transaction...".to_string() }
        },
        DetailState::Error(message) => rsx! {
            ErrorPanel {
                title: "Couldn't load this transaction".to_string(),
                message: message,
                on_retry: move |_| loader.restart(),
            }
        },
        DetailState::NotFound => rsx! {
            main {
                class: "page-main page-main--narrow",
                Card {
                    class: "confirm-card".to_string(),
                    title: Some("Transaction not found".to_string()),
                    p {
                        class: "muted",
                        "This transaction doesn't exist or doesn't belong to your account."
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| { nav.push(Route::Transactions {}); },
                        "Back to History"
                    }
                }
            }
        },
        DetailState::Found(tx) => {
            let incoming = tx.transaction_type.is_incoming();
            let sign = if incoming { "+" } else { "-" };
            rsx! {
                main {
                    class: "page-main page-main--narrow",
                    Card {
                        class: "detail-card".to_string(),

                        div {
                            class: "detail-hero",
                            span {
                                class: if incoming { "tx-direction incoming" } else { "tx-direction outgoing" },
                                if incoming {
                                    Icon { icon: FaArrowDown, width: 20, height: 20 }
                                } else {
                                    Icon { icon: FaArrowUp, width: 20, height: 20 }
                                }
                            }
                            p {
                                class: if incoming { "detail-amount incoming" } else { "detail-amount outgoing" },
                                "{sign}${format_amount(tx.amount)}"
                            }
                            p { class: "detail-kind", "{tx.transaction_type.label()}" }
                            if let Some(ref status) = tx.status {
                                span { class: "tx-status", "{status}" }
                            }
                        }

                        div {
                            class: "detail-rows",
                            div {
                                class: "detail-row",
                                span { class: "detail-label", "Counterparty" }
                                span { class: "detail-value", "{tx.counterparty()}" }
                            }
                            if let Some(ref sender) = tx.sender_upi_id {
                                div {
                                    class: "detail-row",
                                    span { class: "detail-label", "From" }
                                    span { class: "detail-value", "{sender}" }
                                }
                            }
                            if let Some(ref receiver) = tx.receiver_upi_id {
                                div {
                                    class: "detail-row",
                                    span { class: "detail-label", "To" }
                                    span { class: "detail-value", "{receiver}" }
                                }
                            }
                            if let Some(ref category) = tx.category {
                                div {
                                    class: "detail-row",
                                    span { class: "detail-label", "Category" }
                                    span { class: "detail-value", "{category}" }
                                }
                            }
                            if let Some(fee) = tx.fee {
                                div {
                                    class: "detail-row",
                                    span { class: "detail-label", "Fee" }
                                    span { class: "detail-value", "${format_amount(fee)}" }
                                }
                            }
                            if let Some(tax) = tx.tax {
                                div {
                                    class: "detail-row",
                                    span { class: "detail-label", "Tax" }
                                    span { class: "detail-value", "${format_amount(tax)}" }
                                }
                            }
                            div {
                                class: "detail-row",
                                span { class: "detail-label", "Date" }
                                span { class: "detail-value", "{format_datetime(&tx.created_at)}" }
                            }
                            if let Some(ref updated) = tx.updated_at {
                                div {
                                    class: "detail-row",
                                    span { class: "detail-label", "Last update" }
                                    span { class: "detail-value", "{format_datetime(updated)}" }
                                }
                            }
                            div {
                                class: "detail-row",
                                span { class: "detail-label", "Transaction ID" }
                                span {
                                    class: "detail-value detail-id",
                                    "{tx.id}"
                                    button {
                                        class: "copy-button",
                                        title: "Copy transaction ID",
                                        onclick: copy_id,
                                        Icon { icon: FaCopy, width: 12, height: 12 }
                                    }
                                    if copied() {
                                        span { class: "copied-note", "Copied" }
                                    }
                                }
                            }
                        }

                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| { nav.push(Route::Transactions {}); },
                            "Back to History"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "transactions".to_string() }
            {body}
        }
    }
}
