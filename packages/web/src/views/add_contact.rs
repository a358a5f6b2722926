//! Add-contact form.
//!
//! The backend exposes no endpoint for creating contacts; the list comes from
//! the user directory. This page validates the handle locally and points the
//! user at the send flow, where any valid handle works directly.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, Input};
use ui::DashboardHeader;

use crate::views::use_require_auth;
use crate::Route;

fn validate(name: &str, upi_id: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Please enter a name".to_string());
    }
    if !upi_id.contains('@') || upi_id.trim().len() < 3 {
        return Some("Please enter a valid UPI ID".to_string());
    }
    None
}

#[component]
pub fn AddContact() -> Element {
    use_require_auth();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut upi_id = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);

    let mut submit = move |_| {
        if let Some(message) = validate(&name(), &upi_id()) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        saved.set(true);
    };

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "contacts".to_string() }

            main {
                class: "page-main page-main--narrow",

                if saved() {
                    Card {
                        class: "confirm-card".to_string(),
                        title: Some("Handle looks good".to_string()),
                        p {
                            class: "muted",
                            "{name()} ({upi_id()}) will show up in your contacts once they "
                            "transact with you. You can send them money right away."
                        }
                        div {
                            class: "confirm-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| {
                                    nav.push(Route::Send { to: upi_id() });
                                },
                                "Send Money"
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| { nav.push(Route::Contacts {}); },
                                "Back to Contacts"
                            }
                        }
                    }
                } else {
                    Card {
                        class: "auth-card".to_string(),
                        title: Some("Add a contact".to_string()),
                        subtitle: Some("Save someone's NeonPay handle".to_string()),

                        form {
                            class: "auth-form",
                            onsubmit: move |evt| {
                                evt.prevent_default();
                                submit(());
                            },

                            if let Some(ref message) = error() {
                                p { class: "form-error", "{message}" }
                            }

                            label { class: "form-label", "Name" }
                            Input {
                                placeholder: "Sarah Lee".to_string(),
                                value: name(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }

                            label { class: "form-label", "UPI ID" }
                            Input {
                                placeholder: "sarah@neonpay".to_string(),
                                value: upi_id(),
                                oninput: move |evt: FormEvent| upi_id.set(evt.value()),
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit".to_string(),
                                "Save Contact"
                            }
                        }
                    }
                }
            }
        }
    }
}
