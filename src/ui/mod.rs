// Copyright © 2025 Nipun Kumar

//! User interface components for the chatlog viewer.
//!
//! The three list pages share the paging hook in [`paged`]; the drawers are
//! built on [`slideout::Slideout`].

use dioxus::prelude::*;

pub mod chatlog_drawer;
pub mod chatroom;  // Chat-room roster page (public for routing)
pub mod contact;   // Contact list page (public for routing)
pub mod header;
mod paged;
mod pager;
pub mod session;   // Session list page (public for routing)
pub mod settings;
mod slideout;
pub mod toast;
mod user_drawer;

/// Applies a pure state transition to a signal in place.
pub fn transition<S: Default + 'static>(mut state: Signal<S>, f: impl FnOnce(S) -> S) {
    state.with_mut(|s| *s = f(std::mem::take(s)));
}
