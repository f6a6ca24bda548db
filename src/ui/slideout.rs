// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

fn shows_backdrop(open: bool, modal: bool) -> bool {
    open && modal
}

/// Overlay panel pinned to the right edge. Clicking the backdrop or the close
/// button asks the owner to close it. Non-modal panels draw no backdrop and
/// leave the page behind them usable.
#[component]
pub fn Slideout(
    open: bool,
    title: String,
    #[props(default = 500)] width: u32,
    #[props(default)] busy: bool,
    #[props(default = true)] modal: bool,
    on_close: EventHandler<()>,
    footer: Option<Element>,
    children: Element,
) -> Element {
    let transform = if open {
        "transform: translateX(0);"
    } else {
        "transform: translateX(100%);"
    };
    rsx! {
        if shows_backdrop(open, modal) {
            div {
                class: "backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
        div {
            class: "slideout",
            style: "
            width: {width}px;
            {transform}
            transition: transform 0.3s ease;
            ",
            onclick: move |e: Event<MouseData>| {
                e.stop_propagation();
            },
            div { class: "slideout-header",
                h3 {
                    "{title}"
                    if busy {
                        span { class: "spinner" }
                    }
                }
                button {
                    class: "subtle",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { class: "slideout-body",
                if open {
                    {children}
                }
            }
            if let Some(footer) = footer {
                div { class: "slideout-footer", {footer} }
            }
        }
    }
}
