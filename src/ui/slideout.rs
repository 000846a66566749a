use dioxus::prelude::*;

/// Right-hand panel; clicking the backdrop closes it.
#[component]
pub fn Slideout(open: Signal<bool>, children: Element) -> Element {
    let mut open = open;
    let transform = if open() {
        "transform: translateX(0);"
    } else {
        "transform: translateX(100%);"
    };
    rsx! {
        if open() {
            div {
                class: "slideout-backdrop",
                style: "
                position: fixed;
                inset: 0;
                background: rgba(0,0,0,.2);
                ",
                onclick: move |_| open.set(false),
            }
        }
        div {
            class: "slideout",
            style: "
            position: fixed;
            top: 0;
            right: 0;
            width: 320px;
            height: 100%;
            box-shadow: -2px 0 6px rgba(0,0,0,.2);
            {transform}
            transition: transform 0.3s ease;
            ",
            {children}
        }
    }
}
