//! One row in the contact list: avatar initials, handle, badges, and the
//! favorite star. Favoriting is local-only state; see `api::query`.

use api::Contact;
use dioxus::prelude::*;

use crate::format::format_amount;
use crate::icons::{FaCircleCheck, FaPaperPlane, FaStar};
use crate::Icon;

#[component]
pub fn ContactItem(
    contact: Contact,
    on_send: EventHandler<String>,
    on_toggle_favorite: EventHandler<String>,
) -> Element {
    let upi_id = contact.upi_id.clone();
    let contact_id = contact.id.clone();

    rsx! {
        div {
            class: "contact-item",
            div { class: "contact-avatar", "{contact.initials()}" }
            div {
                class: "contact-details",
                p {
                    class: "contact-name",
                    "{contact.name}"
                    if contact.verified {
                        span {
                            class: "contact-verified",
                            title: "Verified",
                            Icon { icon: FaCircleCheck, width: 12, height: 12 }
                        }
                    }
                }
                p { class: "contact-upi", "{contact.upi_id}" }
                if let Some(ref last) = contact.last_transaction {
                    p { class: "contact-last", "Last: ${format_amount(last.amount)}" }
                }
            }
            button {
                class: if contact.favorite { "contact-favorite active" } else { "contact-favorite" },
                title: if contact.favorite { "Remove from favorites" } else { "Add to favorites" },
                onclick: move |_| on_toggle_favorite.call(contact_id.clone()),
                Icon { icon: FaStar, width: 14, height: 14 }
            }
            button {
                class: "contact-send",
                title: "Send money",
                onclick: move |_| on_send.call(upi_id.clone()),
                Icon { icon: FaPaperPlane, width: 14, height: 14 }
            }
        }
    }
}
