// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::paging::{PageEvent, PageState, PAGE_SIZE_OPTIONS};

#[component]
pub fn Pager(page: PageState, loading: bool, on_event: EventHandler<PageEvent>) -> Element {
    let previous_disabled = !page.can_go_previous();
    let number = page.page_number();
    rsx! {
        div { class: "pagination",
            button {
                class: "primary",
                disabled: previous_disabled,
                onclick: move |_| on_event.call(PageEvent::Previous),
                "Previous"
            }
            button {
                class: "primary",
                onclick: move |_| on_event.call(PageEvent::Next),
                "Next"
            }
            select {
                class: "page-size",
                value: "{page.limit}",
                onchange: move |e: Event<FormData>| {
                    if let Ok(limit) = e.value().parse::<usize>() {
                        on_event.call(PageEvent::SetLimit(limit));
                    }
                },
                for size in PAGE_SIZE_OPTIONS {
                    option {
                        value: "{size}",
                        selected: size == page.limit,
                        "{size}"
                    }
                }
            }
            span { class: "page-number", "Page {number}" }
            if loading {
                span { class: "spinner" }
            }
        }
    }
}
