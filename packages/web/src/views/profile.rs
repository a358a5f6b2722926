//! Account page.
//!
//! The backend has no profile-update endpoint, so edits to the display name
//! are applied to the local session only and say so.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, Input};
use ui::icons::FaCircleCheck;
use ui::{format_date, use_session, DashboardHeader, Icon, LogoutButton, Spinner};

use crate::views::use_require_auth;

#[component]
pub fn Profile() -> Element {
    use_require_auth();
    let mut session = use_session();

    let mut name = use_signal(String::new);
    let mut editing = use_signal(|| false);
    let mut saved_note = use_signal(|| false);

    let state = session();
    let Some(user) = state.user else {
        return rsx! {
            div {
                class: "page",
                DashboardHeader { current_page: "profile".to_string() }
                Spinner { label: "Loading profile...".to_string() }
            }
        };
    };

    let start_editing = {
        let current_name = user.name.clone();
        move |_| {
            name.set(current_name.clone());
            saved_note.set(false);
            editing.set(true);
        }
    };

    let save = move |_| {
        let new_name = name().trim().to_string();
        if new_name.is_empty() {
            return;
        }
        session.with_mut(|s| {
            if let Some(ref mut u) = s.user {
                u.name = new_name;
            }
        });
        editing.set(false);
        saved_note.set(true);
    };

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "profile".to_string() }

            main {
                class: "page-main page-main--narrow",

                Card {
                    class: "profile-card".to_string(),

                    div {
                        class: "profile-hero",
                        span { class: "profile-avatar", "{user.initials()}" }
                        div {
                            h1 {
                                class: "profile-name",
                                "{user.display_name()}"
                                if user.verified {
                                    span {
                                        class: "contact-verified",
                                        title: "Verified",
                                        Icon { icon: FaCircleCheck, width: 14, height: 14 }
                                    }
                                }
                            }
                            p { class: "profile-upi", "{user.upi_id}" }
                        }
                    }

                    div {
                        class: "detail-rows",
                        div {
                            class: "detail-row",
                            span { class: "detail-label", "Email" }
                            span { class: "detail-value", "{user.email}" }
                        }
                        if !user.username.is_empty() {
                            div {
                                class: "detail-row",
                                span { class: "detail-label", "Username" }
                                span { class: "detail-value", "{user.username}" }
                            }
                        }
                        if let Some(ref joined) = user.created_at {
                            div {
                                class: "detail-row",
                                span { class: "detail-label", "Member since" }
                                span { class: "detail-value", "{format_date(joined)}" }
                            }
                        }
                    }

                    if editing() {
                        div {
                            class: "profile-edit",
                            label { class: "form-label", "Display name" }
                            Input {
                                value: name(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }
                            div {
                                class: "review-actions",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| editing.set(false),
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: save,
                                    "Save"
                                }
                            }
                        }
                    } else {
                        div {
                            class: "profile-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: start_editing,
                                "Edit Display Name"
                            }
                            LogoutButton { class: "btn btn-danger".to_string() }
                        }
                    }

                    if saved_note() {
                        p {
                            class: "muted profile-note",
                            "Saved on this device. Profile changes don't sync to the server yet."
                        }
                    }
                }
            }
        }
    }
}
