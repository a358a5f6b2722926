//! One row in a transaction list.

use api::Transaction;
use dioxus::prelude::*;

use crate::format::{format_amount, format_datetime};
use crate::icons::{FaArrowDown, FaArrowUp};
use crate::Icon;

#[component]
pub fn TransactionItem(transaction: Transaction, on_select: EventHandler<String>) -> Element {
    let incoming = transaction.transaction_type.is_incoming();
    let sign = if incoming { "+" } else { "-" };
    let id = transaction.id.clone();

    rsx! {
        button {
            class: "transaction-item",
            onclick: move |_| on_select.call(id.clone()),
            span {
                class: if incoming { "tx-direction incoming" } else { "tx-direction outgoing" },
                if incoming {
                    Icon { icon: FaArrowDown, width: 14, height: 14 }
                } else {
                    Icon { icon: FaArrowUp, width: 14, height: 14 }
                }
            }
            div {
                class: "tx-details",
                p { class: "tx-counterparty", "{transaction.counterparty()}" }
                p {
                    class: "tx-meta",
                    "{transaction.transaction_type.label()} · {format_datetime(&transaction.created_at)}"
                }
            }
            div {
                class: "tx-amount-col",
                p {
                    class: if incoming { "tx-amount incoming" } else { "tx-amount outgoing" },
                    "{sign}${format_amount(transaction.amount)}"
                }
                if let Some(ref status) = transaction.status {
                    span { class: "tx-status", "{status}" }
                }
            }
        }
    }
}
