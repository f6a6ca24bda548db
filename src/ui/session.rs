// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::ui::{
    chatlog_drawer::{ChatlogDrawer, ChatlogDrawerState, open_chatlog},
    paged::use_paged_list,
    pager::Pager,
};

#[component]
pub fn SessionPage() -> Element {
    let list = use_paged_list("session", |svc, query| async move {
        svc.get_chat_sessions(&query).await.map(|p| p.items)
    });
    let drawer = use_signal(ChatlogDrawerState::default);
    let state = list.state.read();

    rsx! {
        div { class: "page",
            table {
                thead {
                    tr {
                        th { "UserName" }
                        th { "NickName" }
                        th { "Order" }
                        th { "Time" }
                        th { "Content" }
                        th {}
                    }
                }
                tbody {
                    for item in state.items.iter().cloned() {
                        tr { key: "{item.user_name}",
                            td { "{item.user_name}" }
                            td { "{item.nick_name}" }
                            td { "{item.n_order}" }
                            td { "{item.n_time}" }
                            td { class: "preview", "{item.content}" }
                            td {
                                a {
                                    class: "link",
                                    onclick: move |_| open_chatlog(drawer, &item),
                                    "View Details"
                                }
                            }
                        }
                    }
                }
            }
            if state.items.is_empty() && !list.loading {
                div { class: "empty", "No sessions on this page" }
            }
            Pager {
                page: state.page,
                loading: list.loading,
                on_event: list.on_page(),
            }
            ChatlogDrawer { state: drawer }
        }
    }
}
