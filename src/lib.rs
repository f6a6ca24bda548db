// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

pub mod api;
pub mod app_settings;
pub mod drawer;
pub mod model;
pub mod paging;
pub mod request;
pub mod storage;
mod ui;
pub mod utils;

pub use app_settings::AppSettings;
use ui::chatroom::ChatRoomPage;
use ui::contact::ContactPage;
use ui::header::Header;
use ui::session::SessionPage;
use ui::settings::Settings;
use ui::toast::{Toaster, Toasts};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut settings = use_context_provider(|| Signal::new(AppSettings::default()));
    use_context_provider(Toasts::new);
    let init = use_resource(move || async move {
        settings.set(storage::load_or_default().await);
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if init.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/contact")]
    ContactPage {},
    #[route("/chatroom")]
    ChatRoomPage {},
    #[route("/session")]
    SessionPage {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component: tab header above the routed page.
#[component]
fn Layout() -> Element {
    rsx! {
        Header {}
        main {
            Outlet::<Route> {}
        }
        Toaster {}
    }
}

/// The index route shows contacts.
#[component]
fn Home() -> Element {
    rsx! {
        ContactPage {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page",
            "Could not find /{path}."
            Link { to: Route::Home {}, "Go To Contacts" }
        }
    }
}
