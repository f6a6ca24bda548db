// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Contact,
    ChatRoom,
    Session,
    Settings,
}

impl Tab {
    fn of(route: &Route) -> Option<Self> {
        match route {
            Route::Home {} | Route::ContactPage {} => Some(Tab::Contact),
            Route::ChatRoomPage {} => Some(Tab::ChatRoom),
            Route::SessionPage {} => Some(Tab::Session),
            Route::Settings {} => Some(Tab::Settings),
            Route::PageNotFound { .. } => None,
        }
    }
}

#[component]
pub fn Header() -> Element {
    let selected = Tab::of(&use_route::<Route>());
    let tabs = [
        (Tab::Contact, Route::ContactPage {}, "Contact"),
        (Tab::ChatRoom, Route::ChatRoomPage {}, "Chat Room"),
        (Tab::Session, Route::SessionPage {}, "Sessions"),
        (Tab::Settings, Route::Settings {}, "Settings"),
    ];
    rsx! {
        header {
            nav { class: "tab-list",
                for (tab, to, label) in tabs {
                    {
                        let class = if selected == Some(tab) { "tab selected" } else { "tab" };
                        rsx! {
                            Link { class: class.to_string(), to, "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_route_selects_contact_tab() {
        assert_eq!(Tab::of(&Route::Home {}), Some(Tab::Contact));
        assert_eq!(Tab::of(&Route::SessionPage {}), Some(Tab::Session));
        assert_eq!(
            Tab::of(&Route::PageNotFound {
                segments: vec!["nope".into()]
            }),
            None
        );
    }
}
