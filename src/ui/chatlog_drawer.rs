// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::{error, info}, prelude::*};

use crate::{
    AppSettings,
    api::WeChatService,
    drawer::{DrawerEvent, DrawerState},
    model::{ChatSessionItem, ChatlogItem, PageQuery},
    request::use_request,
    ui::{paged::Service, slideout::Slideout, transition},
    utils::chatlog_day,
};

/// Filter for one chat-log listing: whose messages, on which day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatlogKey {
    pub talker: String,
    pub time: String,
}

pub type ChatlogDrawerState = DrawerState<ChatlogKey, ChatlogItem>;

pub fn open_chatlog(state: Signal<ChatlogDrawerState>, session: &ChatSessionItem) {
    let key = ChatlogKey {
        talker: session.user_name.clone(),
        time: chatlog_day(&session.n_time),
    };
    info!("opening chat log for {} on {}", key.talker, key.time);
    transition(state, |s| s.apply(DrawerEvent::Open(key)));
}

#[component]
pub fn ChatlogDrawer(state: Signal<ChatlogDrawerState>) -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let request = use_request(move |(svc, query): (Service, PageQuery)| async move {
        svc.get_chatlog(&query).await
    });
    let mut failure = use_signal(|| None::<String>);
    let fetch = use_memo(move || state.read().pending_fetch());

    let _ = use_resource(move || async move {
        let Some(fetch) = fetch() else {
            return;
        };
        failure.set(None);
        let svc = WeChatService::from_base(settings.peek().api_base.clone());
        let query = fetch
            .query()
            .with_talker(fetch.key.talker.clone())
            .with_time(fetch.key.time.clone());
        match request.run((svc, query)).await {
            Ok(Some(items)) => transition(state, |s| {
                s.apply(DrawerEvent::Loaded {
                    session: fetch.session,
                    items,
                })
            }),
            Ok(None) => {}
            Err(e) => {
                error!("chat log for {} failed: {e}", fetch.key.talker);
                failure.set(Some(e.to_string()));
                transition(state, |s| s.apply(DrawerEvent::Failed { session: fetch.session }));
            }
        }
    });

    let drawer = state.read();
    let open = drawer.is_open();
    let key = drawer.key().cloned().unwrap_or_default();
    let can_load_more = drawer.can_load_more();
    let empty = open && drawer.items().is_empty() && !drawer.is_pending();
    let talker = key.talker.clone();

    let mut close = move || {
        info!("closing chat log");
        failure.set(None);
        transition(state, |s| s.apply(DrawerEvent::Close));
    };

    rsx! {
        Slideout {
            open,
            width: 600,
            busy: request.loading(),
            title: format!("Chat Session Details({})", key.talker),
            on_close: move |_| close(),
            footer: rsx! {
                button { class: "secondary", onclick: move |_| close(), "Close" }
                button {
                    class: "primary",
                    disabled: !can_load_more,
                    onclick: move |_| transition(state, |s| s.apply(DrawerEvent::LoadMore)),
                    "Load More"
                }
            },
            div {
                input {
                    r#type: "date",
                    value: "{key.time}",
                    onchange: move |e: Event<FormData>| {
                        let time = e.value();
                        if time.is_empty() {
                            return;
                        }
                        let key = ChatlogKey { talker: talker.clone(), time };
                        transition(state, |s| s.apply(DrawerEvent::Refilter(key)));
                    },
                }
            }
            if let Some(message) = failure() {
                div { class: "inline-error", "Failed to load chat log: {message}" }
            }
            if empty {
                div { class: "empty", "No messages on this day" }
            }
            ul {
                for log in drawer.items().iter() {
                    li { key: "{log.seq}",
                        class: if log.is_self { "self" } else { "" },
                        strong { "{log.speaker()}:" }
                        " {log.content}"
                    }
                }
            }
        }
    }
}
