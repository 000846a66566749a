use dioxus::{logger::tracing::Level, prelude::*};

use ragchat::{App, app_settings::AppSettings};

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to init logger: {e}");
    }
    LaunchBuilder::new()
        .with_context(AppSettings::default())
        .launch(App)
}
