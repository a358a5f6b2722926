//! Account creation page.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, Input};
use ui::{make_client, use_session, SessionState};

use crate::Route;

/// Local pre-submission checks; the backend revalidates everything.
fn validate(name: &str, username: &str, email: &str, password: &str, confirm: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Please enter your name".to_string());
    }
    if username.trim().is_empty() {
        return Some("Please choose a username".to_string());
    }
    if !email.contains('@') {
        return Some("Please enter a valid email address".to_string());
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

#[component]
pub fn Signup() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    use_effect(move || {
        let state = session();
        if !state.loading && state.user.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let mut submit = move |_| {
        if busy() {
            return;
        }
        if let Some(message) = validate(&name(), &username(), &email(), &password(), &confirm()) {
            error.set(Some(message));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            let client = make_client();
            let result = client
                .signup(
                    name().trim().to_string(),
                    username().trim().to_string(),
                    email().trim().to_string(),
                    password(),
                )
                .await;
            match result {
                Ok(()) => match client.me().await {
                    Ok(user) => {
                        session.set(SessionState {
                            user: Some(user),
                            loading: false,
                        });
                        nav.replace(Route::Onboarding {});
                    }
                    Err(e) => {
                        tracing::error!("profile fetch after signup failed: {e}");
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
                title: Some("Create your wallet".to_string()),
                subtitle: Some("One account for payments, top-ups, and history".to_string()),

                form {
                    class: "auth-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        submit(());
                    },

                    if let Some(ref message) = error() {
                        p { class: "form-error", "{message}" }
                    }

                    label { class: "form-label", "Full name" }
                    Input {
                        placeholder: "Alex Chen".to_string(),
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    label { class: "form-label", "Username" }
                    Input {
                        placeholder: "alex".to_string(),
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
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
                        placeholder: "At least 6 characters".to_string(),
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    label { class: "form-label", "Confirm password" }
                    Input {
                        r#type: "password".to_string(),
                        placeholder: "Repeat your password".to_string(),
                        value: confirm(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit".to_string(),
                        disabled: busy(),
                        if busy() { "Creating account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a { href: "/login", "Log in" }
                }
            }
        }
    }
}
