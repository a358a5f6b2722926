//! Search + filter + sort controls for the list views.

use api::query::{ContactFilter, SortBy, SortOrder, TransactionFilter};
use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

const CONTACT_FILTERS: [ContactFilter; 3] = [
    ContactFilter::All,
    ContactFilter::Verified,
    ContactFilter::Favorites,
];

const TRANSACTION_FILTERS: [TransactionFilter; 3] = [
    TransactionFilter::All,
    TransactionFilter::Sent,
    TransactionFilter::Received,
];

#[component]
fn SearchBox(search: String, placeholder: String, on_search: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-box",
            span { class: "search-icon", Icon { icon: FaMagnifyingGlass, width: 14, height: 14 } }
            input {
                r#type: "text",
                class: "input search-input",
                placeholder: "{placeholder}",
                value: "{search}",
                oninput: move |evt| on_search.call(evt.value()),
            }
            if !search.is_empty() {
                button {
                    class: "search-clear",
                    onclick: move |_| on_search.call(String::new()),
                    "×"
                }
            }
        }
    }
}

#[component]
pub fn ContactFilterPanel(
    search: String,
    filter: ContactFilter,
    on_search: EventHandler<String>,
    on_filter: EventHandler<ContactFilter>,
) -> Element {
    rsx! {
        div {
            class: "filter-panel",
            SearchBox {
                search: search,
                placeholder: "Search contacts...".to_string(),
                on_search: on_search,
            }
            div {
                class: "filter-tabs",
                for f in CONTACT_FILTERS {
                    button {
                        key: "{f.label()}",
                        class: if filter == f { "filter-tab active" } else { "filter-tab" },
                        onclick: move |_| on_filter.call(f),
                        "{f.label()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TransactionFilterPanel(
    search: String,
    filter: TransactionFilter,
    sort_by: SortBy,
    sort_order: SortOrder,
    on_search: EventHandler<String>,
    on_filter: EventHandler<TransactionFilter>,
    on_sort_by: EventHandler<SortBy>,
    on_sort_order: EventHandler<SortOrder>,
) -> Element {
    rsx! {
        div {
            class: "filter-panel",
            SearchBox {
                search: search,
                placeholder: "Search transactions...".to_string(),
                on_search: on_search,
            }
            div {
                class: "filter-tabs",
                for f in TRANSACTION_FILTERS {
                    button {
                        key: "{f.label()}",
                        class: if filter == f { "filter-tab active" } else { "filter-tab" },
                        onclick: move |_| on_filter.call(f),
                        "{f.label()}"
                    }
                }
            }
            div {
                class: "sort-controls",
                button {
                    class: if sort_by == SortBy::Date { "filter-tab active" } else { "filter-tab" },
                    onclick: move |_| on_sort_by.call(SortBy::Date),
                    "Date"
                }
                button {
                    class: if sort_by == SortBy::Amount { "filter-tab active" } else { "filter-tab" },
                    onclick: move |_| on_sort_by.call(SortBy::Amount),
                    "Amount"
                }
                button {
                    class: "filter-tab sort-order",
                    title: "Toggle sort direction",
                    onclick: move |_| {
                        on_sort_order.call(match sort_order {
                            SortOrder::Asc => SortOrder::Desc,
                            SortOrder::Desc => SortOrder::Asc,
                        })
                    },
                    if sort_order == SortOrder::Desc { "↓" } else { "↑" }
                }
            }
        }
    }
}
