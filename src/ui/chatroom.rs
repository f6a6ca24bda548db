// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::ui::{
    paged::use_paged_list,
    pager::Pager,
    user_drawer::{UserDrawer, UserDrawerState, open_users},
};

#[component]
pub fn ChatRoomPage() -> Element {
    let list = use_paged_list("chat room", |svc, query| async move {
        svc.get_chat_room(&query).await.map(|p| p.items)
    });
    let drawer = use_signal(UserDrawerState::default);
    let state = list.state.read();

    rsx! {
        div { class: "page",
            table {
                thead {
                    tr {
                        th { "ChatRoomName" }
                        th { "NickName" }
                        th { "Owner" }
                        th { "Users" }
                        th { "Remark" }
                    }
                }
                tbody {
                    for item in state.items.iter().cloned() {
                        tr { key: "{item.name}",
                            td { "{item.name}" }
                            td { "{item.nick_name}" }
                            td { "{item.owner}" }
                            td {
                                a {
                                    class: "link",
                                    onclick: move |_| open_users(drawer, &item),
                                    "View Details ({item.users.len()})"
                                }
                            }
                            td { "{item.remark}" }
                        }
                    }
                }
            }
            if state.items.is_empty() && !list.loading {
                div { class: "empty", "No chat rooms on this page" }
            }
            Pager {
                page: state.page,
                loading: list.loading,
                on_event: list.on_page(),
            }
            UserDrawer { state: drawer }
        }
    }
}
