//! Session context and hooks for the UI.

use api::{ApiError, User};
use dioxus::prelude::*;

use crate::make_client;

/// Session state shared by every view.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that resolves the stored token into a user profile.
/// Wrap the app with this component to enable the session context.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session_state = use_signal(SessionState::default);

    // Resolve the stored token on mount; a missing or rejected token just
    // means "signed out".
    let _ = use_resource(move || async move {
        let client = make_client();
        if !client.session().is_authenticated() {
            session_state.set(SessionState {
                user: None,
                loading: false,
            });
            return;
        }
        match client.me().await {
            Ok(user) => {
                session_state.set(SessionState {
                    user: Some(user),
                    loading: false,
                });
            }
            Err(ApiError::Unauthorized) => {
                session_state.set(SessionState {
                    user: None,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!("failed to resolve session: {e}");
                session_state.set(SessionState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| session_state);

    rsx! {
        {children}
    }
}

/// Button that clears the session and returns to the landing page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session_state = use_session();

    let onclick = move |_| {
        let client = make_client();
        client.logout();
        session_state.set(SessionState {
            user: None,
            loading: false,
        });
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
