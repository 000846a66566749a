use dioxus::{logger::tracing::info, prelude::*};

pub mod app_settings;
pub mod message;
pub mod rag;
pub mod session;
pub mod storage;
pub mod theme;
mod ui;

use app_settings::AppSettings;
use ui::home::Home;
use ui::settings::Settings;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // Launch-time defaults (env on native), overridden by whatever was saved.
    let defaults = try_consume_context::<AppSettings>().unwrap_or_default();
    let mut settings = use_context_provider(|| Signal::new(None::<AppSettings>));
    let init = use_resource(move || {
        let defaults = defaults.clone();
        async move {
            let s = storage::load_or_default(defaults).await;
            info!("Using service at {:?}", s.api_base);
            settings.set(Some(s));
        }
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if init.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/settings")]
    SettingsPage {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn SettingsPage() -> Element {
    rsx! {
        Settings {}
        Link { to: Route::Home {}, "Back to chat" }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
