//! Primitive form components shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "".to_string())] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Card(
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] title: Option<String>,
    #[props(default = None)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "card {class}",
            if title.is_some() || subtitle.is_some() {
                div {
                    class: "card-header",
                    if let Some(ref t) = title {
                        h2 { class: "card-title", "{t}" }
                    }
                    if let Some(ref s) = subtitle {
                        p { class: "card-subtitle", "{s}" }
                    }
                }
            }
            div {
                class: "card-body",
                {children}
            }
        }
    }
}
