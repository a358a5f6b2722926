//! Login page.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, Input};
use ui::{make_client, use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already signed in: skip the form. An unfinished walkthrough on this
    // device comes first.
    use_effect(move || {
        let state = session();
        if !state.loading && state.user.is_some() {
            if make_client().session().onboarding_completed() {
                nav.replace(Route::Dashboard {});
            } else {
                nav.replace(Route::Onboarding {});
            }
        }
    });

    let mut submit = move |_| {
        if busy() {
            return;
        }
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            let client = make_client();
            let result = client.login(email_value, password_value).await;
            match result {
                Ok(()) => match client.me().await {
                    Ok(user) => {
                        session.set(SessionState {
                            user: Some(user),
                            loading: false,
                        });
                        // First sign-in on this device goes through the
                        // walkthrough before landing on the dashboard.
                        if client.session().onboarding_completed() {
                            nav.replace(Route::Dashboard {});
                        } else {
                            nav.replace(Route::Onboarding {});
                        }
                    }
                    Err(e) => {
                        tracing::error!("profile fetch after login failed: {e}");
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                },
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            Card {
                class: "auth-card".to_string(),
                title: Some("Welcome back".to_string()),
                subtitle: Some("Log in to your NeonPay wallet".to_string()),

                form {
                    class: "auth-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        submit(());
                    },

                    if let Some(ref message) = error() {
                        p { class: "form-error", "{message}" }
                    }

                    label { class: "form-label", "Email" }
                    Input {
                        r#type: "email".to_string(),
                        placeholder: "you@example.com".to_string(),
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { class: "form-label", "Password" }
                    Input {
                        r#type: "password".to_string(),
                        placeholder: "••••••••".to_string(),
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit".to_string(),
                        disabled: busy(),
                        if busy() { "Logging in..." } else { "Log In" }
                    }
                }

                p {
                    class: "auth-switch",
                    "New to NeonPay? "
                    a { href: "/signup", "Create an account" }
                }
            }
        }
    }
}
