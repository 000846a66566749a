use dioxus::prelude::*;

use crate::message::{Message, Sender};

/// One chat bubble. Text is rendered literally, never as markup.
#[component]
pub fn MessageEl(msg: Message) -> Element {
    let (row_class, bubble_class) = match msg.sender {
        Sender::User => ("message-row user-row", "message human-message"),
        Sender::Bot => ("message-row bot-row", "message ai-message"),
    };
    let links = msg.source_links();
    rsx! {
        div { class: row_class,
            div { class: bubble_class,
                p { class: "message-text", "{msg.text}" }
                if !links.is_empty() {
                    div { class: "sources",
                        div { "Sources:" }
                        ul {
                            for link in links {
                                li {
                                    a {
                                        href: link.href,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder shown while a request is in flight.
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { id: "typing", class: "message-row bot-row",
            div { class: "message ai-message",
                span { class: "typing",
                    span { class: "typing-dot" }
                    "Typing…"
                }
            }
        }
    }
}
