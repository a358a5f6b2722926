//! Amount field with quick-amount shortcuts.

use dioxus::prelude::*;

#[component]
pub fn AmountInput(
    value: String,
    quick_amounts: Vec<u32>,
    #[props(default = "0.00".to_string())] placeholder: String,
    oninput: EventHandler<FormEvent>,
    on_quick_amount: EventHandler<u32>,
) -> Element {
    rsx! {
        div {
            class: "amount-input",
            div {
                class: "amount-field",
                span { class: "amount-currency", "$" }
                input {
                    r#type: "number",
                    class: "input amount-value",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
            div {
                class: "quick-amounts",
                for quick in quick_amounts {
                    button {
                        key: "{quick}",
                        class: if value == quick.to_string() { "quick-amount selected" } else { "quick-amount" },
                        onclick: move |_| on_quick_amount.call(quick),
                        "${quick}"
                    }
                }
            }
        }
    }
}
