// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::info, prelude::*};

use crate::{
    drawer::{DrawerEvent, DrawerState},
    model::{ChatRoomItem, ChatRoomUser},
    ui::{slideout::Slideout, transition},
};

pub type UserDrawerState = DrawerState<String, ChatRoomUser>;

/// Opens the roster drawer on `room`. The member list is embedded in the room
/// record, so the drawer is populated in the same step.
pub fn open_users(state: Signal<UserDrawerState>, room: &ChatRoomItem) {
    info!("showing {} members of {}", room.users.len(), room.name);
    let users = room.users.clone();
    transition(state, |s| {
        let s = s.apply(DrawerEvent::Open(room.name.clone()));
        match s.view().map(|o| o.session) {
            Some(session) => s.apply(DrawerEvent::Loaded { session, items: users }),
            None => s,
        }
    });
}

#[component]
pub fn UserDrawer(state: Signal<UserDrawerState>) -> Element {
    let drawer = state.read();
    let open = drawer.is_open();

    rsx! {
        Slideout {
            open,
            title: "Chat Room Users".to_string(),
            modal: false,
            on_close: move |_| transition(state, |s| s.apply(DrawerEvent::Close)),
            ul {
                for user in drawer.items().iter() {
                    li { key: "{user.user_name}",
                        "{user.user_name}("
                        if user.display_name.is_empty() { "无" } else { "{user.display_name}" }
                        ")"
                    }
                }
            }
        }
    }
}
