// Copyright © 2025 Nipun Kumar

use std::rc::Rc;

use dioxus::prelude::*;

const SEND_ICON: Asset = asset!("/assets/send.svg");

/// Text box plus send button. The owner keeps the text so it can decide
/// whether a send was accepted before clearing it.
#[component]
pub fn ChatInput(value: Signal<String>, disabled: bool, on_send: Callback<(), ()>) -> Element {
    let mut text = value;
    let set_text = move |e: Event<FormData>| {
        text.set(e.value());
    };
    let send = move |_e: Event<MouseData>| {
        on_send(());
    };
    let disabled = if disabled { Some(true) } else { None };
    rsx! {
        div { style: "
            display: flex;
            flex-direction: row;
            gap: 0.5em;
            ",
            textarea {
                id: "input",
                style: "flex-grow: 1; max-height: 10em; height: 3em;",
                placeholder: "Ask a question…",
                oninput: set_text,
                onkeydown: move |e: Event<KeyboardData>| {
                    let k: Rc<KeyboardData> = e.data();
                    if k.key() == Key::Enter && !k.modifiers().shift() {
                        e.prevent_default();
                        on_send(());
                    }
                },
                value: text,
            }
            button { id: "send", onclick: send, disabled,
                img { src: SEND_ICON }
            }
        }
    }
}
