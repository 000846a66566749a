// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    app_settings::AppSettings,
    storage::{Storage, get_storage},
};

#[derive(Props, Clone, PartialEq)]
pub struct SettingsProps {
    pub on_close: Option<EventHandler<()>>,
}

#[allow(non_snake_case)]
#[component]
pub fn Settings(props: SettingsProps) -> Element {
    let mut settings_ctx = use_context::<Signal<Option<AppSettings>>>();
    let current = (*settings_ctx.peek()).clone().unwrap_or_default();
    let mut api_base = use_signal(|| current.api_base.clone());
    let mut top_k = use_signal(|| current.default_top_k.to_string());
    let mut saved: Signal<Option<String>> = use_signal(|| None);

    let save_settings = move |_e: Event<MouseData>| async move {
        let base = settings_ctx().unwrap_or_default();
        let s = match base.with_form(&api_base(), &top_k()) {
            Ok(s) => s,
            Err(e) => {
                saved.set(Some(e.to_string()));
                return;
            }
        };
        let storage = match get_storage().await {
            Ok(s) => Some(s),
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                None
            }
        };
        let persisted = match storage {
            Some(st) => match st.save_settings(&s).await {
                Ok(()) => true,
                Err(e) => {
                    warn!("Could not save settings: {e:?}");
                    false
                }
            },
            None => false,
        };
        settings_ctx.set(Some(s));
        saved.set(Some(if persisted {
            "Saved.".to_string()
        } else {
            "Applied for this session only.".to_string()
        }));
    };

    // no page origin to fall back on outside the browser
    let (placeholder, url_hint) = if cfg!(target_arch = "wasm32") {
        ("same origin", "Requests go to <url>/rag. Leave empty to use the page origin.")
    } else {
        ("http://127.0.0.1:8000", "Requests go to <url>/rag.")
    };

    rsx! {
        div {
            style: "padding: 1rem; height: 100%; overflow-y: auto;",
            onclick: move |e: Event<MouseData>| {
                e.stop_propagation();
            },

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                h3 { style: "margin: 0;", "Settings" }
                if let Some(on_close) = props.on_close {
                    button {
                        style: "
                            background: none;
                            border: none;
                            font-size: 1.2rem;
                            cursor: pointer;
                            padding: 0.25rem;
                            color: #666;
                        ",
                        onclick: move |_| {
                            on_close.call(());
                        },
                        "×"
                    }
                }
            }

            hr { style: "margin-bottom: 1rem;" }

            label { style: "display: block; margin-bottom: 0.25rem;", "Service URL" }
            input {
                style: "width: 100%; margin-bottom: 0.25rem;",
                r#type: "text",
                placeholder,
                value: api_base,
                oninput: move |e: Event<FormData>| api_base.set(e.value()),
            }
            div { style: "font-size: 0.8rem; color: #666; margin-bottom: 1rem;",
                "{url_hint}"
            }

            label { style: "display: block; margin-bottom: 0.25rem;", "Default top-K" }
            input {
                style: "width: 6em; margin-bottom: 1rem;",
                r#type: "number",
                min: "1",
                value: top_k,
                oninput: move |e: Event<FormData>| top_k.set(e.value()),
            }

            div {
                button { onclick: save_settings, "Save" }
                if let Some(msg) = saved() {
                    span { style: "margin-left: 0.5rem; font-size: 0.8rem;", "{msg}" }
                }
            }
        }
    }
}
