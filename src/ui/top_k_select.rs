use dioxus::prelude::*;

use crate::session::parse_top_k;

/// Numeric selector for how many context documents the service should use.
#[component]
pub fn TopKSelect(value: u32, options: Vec<u32>, on_select: Callback<u32, ()>) -> Element {
    rsx! {
        div { class: "top-k",
            span { "Top-K" }
            select {
                id: "topK",
                value: "{value}",
                onchange: move |e: Event<FormData>| {
                    on_select(parse_top_k(&e.value(), value))
                },
                for o in options {
                    option { value: "{o}", selected: o == value, "{o}" }
                }
            }
        }
    }
}

/// Selector choices, always including `current` so a configured default shows up.
pub fn top_k_options(choices: &[u32], current: u32) -> Vec<u32> {
    let mut options = choices.to_vec();
    if !options.contains(&current) {
        options.push(current);
        options.sort_unstable();
    }
    options
}
