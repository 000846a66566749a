use dioxus::{logger::tracing::warn, prelude::*};

use crate::{
    app_settings::AppSettings,
    rag::{Health, RagClient, RagService},
};

/// Backend reachability, probed on mount and on click.
#[component]
pub fn StatusBadge() -> Element {
    let settings = use_context::<Signal<Option<AppSettings>>>();
    let mut health = use_resource(move || async move {
        let Some(settings) = settings() else {
            return (Health::Checking, None);
        };
        let probe = RagClient::new(settings.api_base).health().await;
        let summary = match &probe {
            Ok(report) => Some(report.summary()),
            Err(e) => {
                warn!("Health check failed: {e:?}");
                None
            }
        };
        (Health::from_probe(&probe), summary)
    });
    let (h, summary) = health().unwrap_or((Health::Checking, None));
    let title = match summary {
        Some(s) => format!("{s}. Click to re-check."),
        None => "Click to re-check backend status.".to_string(),
    };
    let color = match h {
        Health::Checking => "#9ca3af",
        Health::Online => "#22c55e",
        Health::Degraded => "#f59e0b",
        Health::Offline => "#ef4444",
    };
    rsx! {
        button {
            id: "statusBadge",
            class: "status-badge",
            title,
            onclick: move |_| health.restart(),
            span {
                style: "
                display: inline-block;
                width: 0.5em;
                height: 0.5em;
                border-radius: 50%;
                margin-right: 0.4em;
                background: {color};
                ",
            }
            "{h.label()}"
        }
    }
}
