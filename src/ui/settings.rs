// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::{info, warn}, prelude::*};

use crate::{
    AppSettings,
    paging::PAGE_SIZE_OPTIONS,
    storage::{Storage, get_storage},
};

#[allow(non_snake_case)]
#[component]
pub fn Settings() -> Element {
    let mut settings_ctx = use_context::<Signal<AppSettings>>();
    let initial = settings_ctx.peek().clone();
    let mut api_base = use_signal(|| initial.api_base.clone());
    let mut page_size = use_signal(|| initial.page_size);
    let mut status: Signal<Option<String>> = use_signal(|| None);

    let save_settings = move |_| async move {
        let s = AppSettings {
            id: Some(1),
            api_base: api_base(),
            page_size: page_size(),
        }
        .sanitized();
        match get_storage().await {
            Ok(st) => {
                if let Err(e) = st.save_settings(&s).await {
                    warn!("Could not save settings: {e:?}");
                    status.set(Some(format!("Could not save settings: {e}")));
                } else {
                    info!("settings saved, api base {:?}", s.api_base);
                    status.set(Some("Saved".to_string()));
                }
            }
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                status.set(Some(format!("Settings apply to this session only: {e}")));
            }
        }
        api_base.set(s.api_base.clone());
        settings_ctx.set(s);
    };

    rsx! {
        div { class: "page settings",
            h3 { "Settings" }
            hr {}
            label { "API base URL"
                input {
                    r#type: "text",
                    placeholder: "same origin",
                    value: api_base,
                    oninput: move |e: Event<FormData>| api_base.set(e.value()),
                }
            }
            p { class: "hint",
                "Leave empty to call /api/v1 on the page's own origin."
            }
            label { "Default page size"
                select {
                    value: "{page_size}",
                    onchange: move |e: Event<FormData>| {
                        if let Ok(n) = e.value().parse::<usize>() {
                            page_size.set(n);
                        }
                    },
                    for size in PAGE_SIZE_OPTIONS {
                        option {
                            value: "{size}",
                            selected: size == page_size(),
                            "{size}"
                        }
                    }
                }
            }
            div {
                button { class: "primary", onclick: save_settings, "Save" }
                if let Some(s) = status() {
                    span { class: "status", "{s}" }
                }
            }
        }
    }
}
