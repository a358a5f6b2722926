//! Send-money flow: enter, review, result.
//!
//! The flow state machine owns the step transitions and the idempotency key;
//! this view wires it to the backend and renders one card per step. The
//! balance shown next to the amount field is a hint from the last fetch, the
//! backend still has the final say on funds.

use api::flows::{SendFlow, SendStep, QUICK_SEND_AMOUNTS};
use api::query::{filter_contacts, ContactFilter};
use api::Contact;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, Input};
use ui::icons::FaCircleCheck;
use ui::{format_amount, make_client, DashboardHeader, Icon, AmountInput, Spinner};

use crate::views::use_require_auth;
use crate::Route;

const PAY_AGAIN_LIMIT: usize = 6;

#[component]
pub fn Send(to: String) -> Element {
    use_require_auth();
    let nav = use_navigator();

    let prefill = to.clone();
    let mut flow = use_signal(move || {
        let mut f = SendFlow::new();
        if !prefill.is_empty() {
            f.set_recipient(prefill.clone());
        }
        f
    });

    let mut balance = use_signal(|| Option::<f64>::None);
    let mut contacts = use_signal(Vec::<Contact>::new);
    let mut contact_search = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut loaded = use_signal(|| false);

    // Balance and contacts are both hints here; a failed fetch leaves the
    // form fully usable.
    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.balance().await {
            Ok(b) => balance.set(Some(b)),
            Err(e) => tracing::warn!("balance fetch failed: {e}"),
        }
        match client.contacts().await {
            Ok(list) => contacts.set(list),
            Err(e) => tracing::warn!("contacts fetch failed: {e}"),
        }
        loaded.set(true);
    });

    let confirm = move |_| {
        if sending() {
            return;
        }
        let request = match flow.with_mut(|f| f.submit_request(balance())) {
            Ok(request) => request,
            // The flow recorded the message; stay on the review card.
            Err(_) => return,
        };
        sending.set(true);
        spawn(async move {
            match make_client().send_money(&request).await {
                Ok(id) => flow.with_mut(|f| f.complete(id)),
                Err(e) => flow.with_mut(|f| f.fail(e.to_string())),
            }
            sending.set(false);
        });
    };

    let state = flow();
    let pay_again =
        filter_contacts(&contacts(), &contact_search(), ContactFilter::All);

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "send".to_string() }

            if !loaded() {
                Spinner { label: "Loading...".to_string() }
            } else {
                main {
                    class: "page-main send-main",

                    div {
                        class: "send-column",
                        {match state.step() {
                            SendStep::Enter => rsx! {
                                Card {
                                    class: "send-card".to_string(),
                                    title: Some("Send Money".to_string()),
                                    subtitle: balance().map(|b| format!("Available: ${}", format_amount(b))),

                                    if let Some(message) = state.error() {
                                        p { class: "form-error", "{message}" }
                                    }

                                    label { class: "form-label", "Recipient UPI ID" }
                                    Input {
                                        placeholder: "name@neonpay".to_string(),
                                        value: state.recipient().to_string(),
                                        oninput: move |evt: FormEvent| {
                                            flow.with_mut(|f| f.set_recipient(evt.value()));
                                        },
                                    }

                                    label { class: "form-label", "Amount" }
                                    AmountInput {
                                        value: state.amount().to_string(),
                                        quick_amounts: QUICK_SEND_AMOUNTS.to_vec(),
                                        oninput: move |evt: FormEvent| {
                                            flow.with_mut(|f| f.set_amount(evt.value()));
                                        },
                                        on_quick_amount: move |amount: u32| {
                                            flow.with_mut(|f| f.quick_amount(amount));
                                        },
                                    }

                                    Button {
                                        variant: ButtonVariant::Primary,
                                        disabled: !state.can_review(),
                                        onclick: move |_| {
                                            flow.with_mut(|f| f.review());
                                        },
                                        "Review Transfer"
                                    }
                                }
                            },
                            SendStep::Review => rsx! {
                                Card {
                                    class: "send-card".to_string(),
                                    title: Some("Review Transfer".to_string()),
                                    subtitle: Some("Double-check before you send".to_string()),

                                    if let Some(message) = state.error() {
                                        p { class: "form-error", "{message}" }
                                    }

                                    div {
                                        class: "review-rows",
                                        div {
                                            class: "review-row",
                                            span { class: "review-label", "To" }
                                            span { class: "review-value", "{state.recipient()}" }
                                        }
                                        div {
                                            class: "review-row",
                                            span { class: "review-label", "Amount" }
                                            span {
                                                class: "review-value review-amount",
                                                if let Some(amount) = state.parsed_amount() {
                                                    "${format_amount(amount)}"
                                                }
                                            }
                                        }
                                        if let Some(b) = balance() {
                                            div {
                                                class: "review-row",
                                                span { class: "review-label", "Balance after" }
                                                span {
                                                    class: "review-value",
                                                    if let Some(amount) = state.parsed_amount() {
                                                        "${format_amount(b - amount)}"
                                                    }
                                                }
                                            }
                                        }
                                    }

                                    div {
                                        class: "review-actions",
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            disabled: sending(),
                                            onclick: move |_| {
                                                flow.with_mut(|f| f.back_to_edit());
                                            },
                                            "Back"
                                        }
                                        Button {
                                            variant: ButtonVariant::Primary,
                                            disabled: sending(),
                                            onclick: confirm,
                                            if sending() { "Sending..." } else { "Confirm & Send" }
                                        }
                                    }
                                }
                            },
                            SendStep::Result => rsx! {
                                Card {
                                    class: "send-card result-card".to_string(),

                                    span {
                                        class: "result-icon success",
                                        Icon { icon: FaCircleCheck, width: 36, height: 36 }
                                    }
                                    h2 { class: "result-title", "Money Sent" }
                                    p {
                                        class: "result-summary",
                                        if let Some(amount) = state.parsed_amount() {
                                            "${format_amount(amount)} to {state.recipient()}"
                                        }
                                    }
                                    if let Some(id) = state.transaction_id() {
                                        p { class: "result-reference", "Reference: {id}" }
                                    }

                                    div {
                                        class: "review-actions",
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: move |_| {
                                                flow.with_mut(|f| f.reset());
                                            },
                                            "Send Another"
                                        }
                                        if let Some(id) = state.transaction_id() {
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                onclick: {
                                                    let id = id.to_string();
                                                    move |_| {
                                                        nav.push(Route::TransactionDetail {
                                                            transaction_id: id.clone(),
                                                        });
                                                    }
                                                },
                                                "View Details"
                                            }
                                        }
                                    }
                                }
                            },
                        }}
                    }

                    if state.step() == SendStep::Enter && !contacts().is_empty() {
                        aside {
                            class: "pay-again",
                            h3 { class: "pay-again-title", "Pay Again" }
                            input {
                                r#type: "text",
                                class: "input pay-again-search",
                                placeholder: "Search people...",
                                value: "{contact_search()}",
                                oninput: move |evt| contact_search.set(evt.value()),
                            }
                            div {
                                class: "pay-again-list",
                                for contact in pay_again.into_iter().take(PAY_AGAIN_LIMIT) {
                                    button {
                                        key: "{contact.id}",
                                        class: "pay-again-item",
                                        onclick: {
                                            let upi = contact.upi_id.clone();
                                            move |_| {
                                                flow.with_mut(|f| f.set_recipient(upi.clone()));
                                            }
                                        },
                                        span { class: "person-avatar", "{contact.initials()}" }
                                        div {
                                            class: "pay-again-details",
                                            span { class: "person-name", "{contact.name}" }
                                            span { class: "person-upi", "{contact.upi_id}" }
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
}
