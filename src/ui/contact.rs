// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::ui::{paged::use_paged_list, pager::Pager};

#[component]
pub fn ContactPage() -> Element {
    let list = use_paged_list("contact", |svc, query| async move {
        svc.get_contact(&query).await.map(|p| p.items)
    });
    let state = list.state.read();

    rsx! {
        div { class: "page",
            table {
                thead {
                    tr {
                        th { "UserName" }
                        th { "Alias" }
                        th { "Remark" }
                        th { "NickName" }
                        th { "Friend" }
                    }
                }
                tbody {
                    for item in state.items.iter() {
                        tr { key: "{item.user_name}",
                            td { "{item.user_name}" }
                            td { "{item.alias}" }
                            td { "{item.remark}" }
                            td { "{item.nick_name}" }
                            td { if item.is_friend { "✓" } }
                        }
                    }
                }
            }
            if state.items.is_empty() && !list.loading {
                div { class: "empty", "No contacts on this page" }
            }
            Pager {
                page: state.page,
                loading: list.loading,
                on_event: list.on_page(),
            }
        }
    }
}
