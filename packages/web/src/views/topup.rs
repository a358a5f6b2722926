//! Wallet top-up through the external checkout widget.
//!
//! Order of operations: create the order, remember the backend's pending
//! transaction id, open the widget, then verify the signed payment. A
//! verification error fires a best-effort call to mark the pending
//! transaction failed so it doesn't linger as "pending" forever.

use api::flows::{TopUpFlow, TopUpStep, MIN_TOPUP_AMOUNT, QUICK_TOPUP_AMOUNTS};
use api::models::VerifyRequest;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card};
use ui::icons::FaCircleCheck;
use ui::{format_amount, make_client, use_session, AmountInput, DashboardHeader, Icon, Spinner};

use crate::checkout::{open_checkout, CheckoutOptions, CheckoutOutcome};
use crate::views::use_require_auth;
use crate::Route;

#[component]
pub fn TopUp() -> Element {
    use_require_auth();
    let session = use_session();
    let nav = use_navigator();

    let mut flow = use_signal(TopUpFlow::new);
    let mut amount_text = use_signal(|| "100".to_string());

    let begin = move |_| {
        let parsed = amount_text().trim().parse::<f64>().unwrap_or(0.0);
        let amount = match flow.with_mut(|f| {
            f.set_amount(parsed);
            f.begin()
        }) {
            Ok(amount) => amount,
            // The flow keeps the message; stay on the form.
            Err(_) => return,
        };
        let user = session().user;

        spawn(async move {
            let client = make_client();
            let order = match client.create_topup_order(amount).await {
                Ok(order) => order,
                Err(e) => {
                    flow.with_mut(|f| f.fail(e.to_string()));
                    return;
                }
            };
            flow.with_mut(|f| f.order_created(order.transaction_id.clone()));

            let options = CheckoutOptions {
                order_id: order.order_id.clone(),
                amount,
                description: format!("Wallet top-up of ${}", format_amount(amount)),
                prefill_name: user.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
                prefill_email: user.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
            };
            match open_checkout(options).await {
                Ok(CheckoutOutcome::Paid(payment)) => {
                    let request = VerifyRequest {
                        payment_id: payment.payment_id,
                        order_id: payment.order_id,
                        signature: payment.signature,
                        transaction_id: order.transaction_id.clone(),
                        amount,
                    };
                    match client.verify_topup(&request).await {
                        Ok(()) => flow.with_mut(|f| f.verified()),
                        Err(e) => {
                            let pending =
                                flow.with_mut(|f| f.verification_failed(e.to_string()));
                            if let Some(id) = pending {
                                if let Err(fail_err) = client.mark_transaction_failed(&id).await {
                                    tracing::warn!(
                                        "could not mark transaction {id} as failed: {fail_err}"
                                    );
                                }
                            }
                        }
                    }
                }
                Ok(CheckoutOutcome::Failed(message)) => flow.with_mut(|f| f.fail(message)),
                Ok(CheckoutOutcome::Dismissed) => flow.with_mut(|f| f.dismissed()),
                Err(message) => flow.with_mut(|f| f.fail(message)),
            }
        });
    };

    let state = flow();

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "topup".to_string() }

            main {
                class: "page-main page-main--narrow",
                {match state.step() {
                    TopUpStep::Enter => rsx! {
                        Card {
                            class: "send-card".to_string(),
                            title: Some("Top Up Wallet".to_string()),
                            subtitle: Some("Add money from your card or bank".to_string()),

                            if let Some(message) = state.error() {
                                p { class: "form-error", "{message}" }
                            }

                            AmountInput {
                                value: amount_text(),
                                quick_amounts: QUICK_TOPUP_AMOUNTS.to_vec(),
                                oninput: move |evt: FormEvent| amount_text.set(evt.value()),
                                on_quick_amount: move |amount: u32| {
                                    amount_text.set(amount.to_string());
                                },
                            }

                            p { class: "muted", "Minimum top-up is ${MIN_TOPUP_AMOUNT}" }

                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: begin,
                                "Add Money"
                            }
                        }
                    },
                    TopUpStep::Processing => rsx! {
                        Spinner { label: "Waiting for the payment gateway...".to_string() }
                    },
                    TopUpStep::Result => rsx! {
                        Card {
                            class: "send-card result-card".to_string(),

                            span {
                                class: "result-icon success",
                                Icon { icon: FaCircleCheck, width: 36, height: 36 }
                            }
                            h2 { class: "result-title", "Wallet Topped Up" }
                            p {
                                class: "result-summary",
                                "+${format_amount(state.amount())} added to your balance"
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
                                        amount_text.set("100".to_string());
                                    },
                                    "Top Up Again"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                                    "Go to Dashboard"
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
