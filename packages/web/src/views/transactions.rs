//! Full transaction history with search, filters, sorting, and totals.

use api::query::{
    self, SortBy, SortOrder, TransactionFilter,
};
use api::Transaction;
use dioxus::prelude::*;
use ui::{
    format_amount, make_client, DashboardHeader, ErrorPanel, Spinner, TransactionFilterPanel,
    TransactionItem,
};

use crate::views::use_require_auth;
use crate::Route;

#[component]
pub fn Transactions() -> Element {
    use_require_auth();
    let nav = use_navigator();

    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut search = use_signal(String::new);
    let mut filter = use_signal(TransactionFilter::default);
    let mut sort_by = use_signal(SortBy::default);
    let mut sort_order = use_signal(SortOrder::default);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);

    let mut loader = use_resource(move || async move {
        loaded.set(false);
        load_error.set(None);
        match make_client().transactions().await {
            Ok(list) => transactions.set(list),
            Err(e) => load_error.set(Some(e.to_string())),
        }
        loaded.set(true);
    });

    // Filtering and sorting are pure functions over the fetched list, so
    // every keystroke just recomputes the view.
    let mut visible = query::filter_transactions(&transactions(), &search(), filter());
    query::sort_transactions(&mut visible, sort_by(), sort_order());
    let totals = query::transaction_totals(&transactions());

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "transactions".to_string() }

            if !loaded() {
                Spinner { label: "Loading history...".to_string() }
            } else if let Some(ref message) = load_error() {
                ErrorPanel {
                    title: "Couldn't load your history".to_string(),
                    message: message.clone(),
                    on_retry: move |_| loader.restart(),
                }
            } else {
                main {
                    class: "page-main",

                    div {
                        class: "page-head",
                        h1 { "Transaction History" }
                    }

                    div {
                        class: "stats-row",
                        div {
                            class: "stat-card stat-received",
                            p { class: "stat-label", "Received" }
                            p { class: "stat-value", "+${format_amount(totals.received)}" }
                            p { class: "stat-count", "{totals.received_count} transactions" }
                        }
                        div {
                            class: "stat-card stat-sent",
                            p { class: "stat-label", "Sent" }
                            p { class: "stat-value", "-${format_amount(totals.sent)}" }
                            p { class: "stat-count", "{totals.sent_count} transactions" }
                        }
                    }

                    TransactionFilterPanel {
                        search: search(),
                        filter: filter(),
                        sort_by: sort_by(),
                        sort_order: sort_order(),
                        on_search: move |value| search.set(value),
                        on_filter: move |value| filter.set(value),
                        on_sort_by: move |value| sort_by.set(value),
                        on_sort_order: move |value| sort_order.set(value),
                    }

                    if visible.is_empty() {
                        div {
                            class: "empty-state",
                            if transactions().is_empty() {
                                p { "No transactions yet. Send money or top up to get started." }
                            } else {
                                p { "No transactions match your filters." }
                            }
                        }
                    } else {
                        div {
                            class: "transaction-list",
                            for tx in visible {
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
