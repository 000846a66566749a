//! Main chat view.
//!
//! Owns one [`ChatSession`] and wires it to the page: the input box, the top-K
//! selector, the theme button and the message list. The only await point is
//! the request inside `send`; everything before and after it mutates the
//! session synchronously.

use dioxus::prelude::*;

use crate::{
    app_settings::{AppSettings, initial_top_k},
    rag::{RagClient, RagService},
    session::{ChatSession, TOP_K_CHOICES},
    ui::{
        chat_input::ChatInput,
        message::{MessageEl, TypingIndicator},
        settings::Settings,
        slideout::Slideout,
        status_badge::StatusBadge,
        top_k_select::{TopKSelect, top_k_options},
    },
};

const SCROLL_TO_BOTTOM: &str =
    "const el = document.getElementById('messages'); if (el) { el.scrollTop = el.scrollHeight; }";

#[component]
pub fn Home() -> Element {
    let settings = use_context::<Signal<Option<AppSettings>>>();
    let mut session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);
    let default_top_k = use_memo(move || initial_top_k(settings.read().as_ref()));
    let mut top_k = use_signal(|| *default_top_k.peek());
    // A newly saved default replaces the current choice.
    use_effect(move || top_k.set(default_top_k()));
    let configured = use_memo(move || {
        settings
            .read()
            .as_ref()
            .is_some_and(AppSettings::is_configured)
    });
    let mut settings_open = use_signal(|| false);

    // Re-apply the theme to <html>/<body> only when it flips.
    let theme = use_memo(move || session.read().theme());
    use_effect(move || {
        let _ = document::eval(&theme().apply_script());
    });

    // Keep the newest bubble (or the typing placeholder) in view.
    let rendered = use_memo(move || {
        let s = session.read();
        (s.messages().len(), s.is_typing())
    });
    use_effect(move || {
        let _ = rendered();
        let _ = document::eval(SCROLL_TO_BOTTOM);
    });

    // Single-flight send: a missing service url, blank input or a request
    // already outstanding leaves the page untouched.
    let send = move |_: ()| async move {
        let Some(api_base) = settings
            .peek()
            .as_ref()
            .filter(|s| s.is_configured())
            .map(|s| s.api_base.clone())
        else {
            return;
        };
        let text = input.cloned();
        let Some(ticket) = session.with_mut(|s| s.begin_send(&text, top_k())) else {
            return;
        };
        input.set(String::new());

        let client = RagClient::new(api_base);
        let outcome = client.ask(ticket.request()).await;

        session.with_mut(|s| s.finish(ticket, outcome));
    };

    let (messages, typing, sending, dark) = {
        let s = session.read();
        (
            s.messages().to_vec(),
            s.is_typing(),
            s.is_sending(),
            s.theme().is_dark(),
        )
    };
    let options = top_k_options(&TOP_K_CHOICES, top_k());

    rsx! {
        div {
            class: "chat",
            style: "
            display: flex;
            flex-direction: column;
            height: 100vh;
            ",
            div {
                class: "chat-header",
                style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 0.75em;
                padding: 0.75em 1.5em;
                ",
                h1 { style: "flex-grow: 1; font-size: 1.2em; margin: 0;", "Ask the docs" }
                StatusBadge {}
                TopKSelect {
                    value: top_k(),
                    options,
                    on_select: move |k: u32| top_k.set(k),
                }
                button {
                    id: "themeBtn",
                    onclick: move |_| {
                        session.with_mut(|s| {
                            s.toggle_theme();
                        });
                    },
                    if dark { "Light" } else { "Dark" }
                }
                button { onclick: move |_| settings_open.set(true), "Settings" }
            }
            div {
                id: "messages",
                style: "
                flex-grow: 1;
                overflow: auto;
                padding: 0 1.5em;
                ",
                for (i, m) in messages.into_iter().enumerate() {
                    MessageEl { key: "{i}", msg: m }
                }
                if typing {
                    TypingIndicator {}
                }
            }
            div {
                style: "
                flex-grow: 0;
                padding: 1.5em;
                ",
                ChatInput {
                    value: input,
                    disabled: sending || !configured(),
                    on_send: Callback::new(send),
                }
            }
            Slideout { open: settings_open,
                Settings { on_close: move |_| settings_open.set(false) }
            }
        }
    }
}
