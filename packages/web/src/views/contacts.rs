//! Contact list with search, filters, and local-only favorites.

use api::query::{self, ContactFilter};
use api::Contact;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{make_client, ContactFilterPanel, ContactItem, DashboardHeader, ErrorPanel, Spinner};

use crate::views::use_require_auth;
use crate::Route;

#[component]
pub fn Contacts() -> Element {
    use_require_auth();
    let nav = use_navigator();

    let mut contacts = use_signal(Vec::<Contact>::new);
    let mut search = use_signal(String::new);
    let mut filter = use_signal(ContactFilter::default);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(|| false);

    let mut loader = use_resource(move || async move {
        loaded.set(false);
        load_error.set(None);
        match make_client().contacts().await {
            Ok(list) => contacts.set(list),
            Err(e) => load_error.set(Some(e.to_string())),
        }
        loaded.set(true);
    });

    let visible = query::filter_contacts(&contacts(), &search(), filter());
    let no_contacts_at_all = contacts().is_empty();

    rsx! {
        div {
            class: "page",
            DashboardHeader { current_page: "contacts".to_string() }

            if !loaded() {
                Spinner { label: "Loading contacts...".to_string() }
            } else if let Some(ref message) = load_error() {
                ErrorPanel {
                    title: "Couldn't load contacts".to_string(),
                    message: message.clone(),
                    on_retry: move |_| loader.restart(),
                }
            } else {
                main {
                    class: "page-main",

                    div {
                        class: "page-head",
                        h1 { "Contacts" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| { nav.push(Route::AddContact {}); },
                            "Add Contact"
                        }
                    }

                    ContactFilterPanel {
                        search: search(),
                        filter: filter(),
                        on_search: move |value| search.set(value),
                        on_filter: move |value| filter.set(value),
                    }

                    if visible.is_empty() {
                        div {
                            class: "empty-state",
                            if no_contacts_at_all {
                                p { "You don't have any contacts yet." }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| { nav.push(Route::AddContact {}); },
                                    "Add Your First Contact"
                                }
                            } else {
                                p { "No contacts match your search." }
                            }
                        }
                    } else {
                        div {
                            class: "contact-list",
                            for contact in visible {
                                ContactItem {
                                    key: "{contact.id}",
                                    contact: contact,
                                    on_send: move |upi: String| {
                                        nav.push(Route::Send { to: upi });
                                    },
                                    on_toggle_favorite: move |id: String| {
                                        contacts.with_mut(|list| query::toggle_favorite(list, &id));
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
