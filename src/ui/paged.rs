// Copyright © 2025 Nipun Kumar

use std::future::Future;

use dioxus::{logger::tracing::error, prelude::*};

use crate::{
    AppSettings,
    api::{ApiResult, DefaultHttp, WeChatService},
    model::PageQuery,
    paging::{ListEvent, ListState, PageEvent, PageState},
    request::use_request,
    ui::{toast::use_toasts, transition},
};

pub type Service = WeChatService<DefaultHttp>;

pub struct PagedList<T: 'static> {
    pub state: Signal<ListState<T>>,
    pub loading: bool,
}

impl<T: 'static> PagedList<T> {
    pub fn on_page(&self) -> impl FnMut(PageEvent) + 'static {
        let state = self.state;
        move |e| transition(state, |s| s.apply(ListEvent::Page(e)))
    }
}

/// Holds `limit`/`offset` for a list page and refetches whenever either
/// changes. Each response replaces the page's rows; failures are logged and
/// surfaced as a toast while the previous rows stay on screen.
pub fn use_paged_list<T, F, Fut>(label: &'static str, fetch: F) -> PagedList<T>
where
    T: Clone + 'static,
    F: Fn(Service, PageQuery) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let settings = use_context::<Signal<AppSettings>>();
    let mut toasts = use_toasts();
    let state = use_signal(|| ListState::new(PageState::with_limit(settings.peek().page_size)));
    let request = use_request(move |(svc, query): (Service, PageQuery)| fetch(svc, query));
    let page = use_memo(move || state.read().page);
    let mut last_error = use_signal(|| None::<u64>);

    let _ = use_resource(move || async move {
        let page = page();
        let svc = WeChatService::from_base(settings.read().api_base.clone());
        if let Some(id) = last_error.write().take() {
            toasts.dismiss(id);
        }

        let loading = toasts.loading(format!("Loading {label}..."));
        let result = request.run((svc, page.query())).await;
        drop(loading);

        match result {
            Ok(Some(items)) => transition(state, |s| s.apply(ListEvent::Loaded { page, items })),
            Ok(None) => {}
            Err(e) => {
                error!("{label} page {} failed: {e}", page.page_number());
                last_error.set(Some(toasts.error(format!("Failed to load {label} data."))));
            }
        }
    });

    PagedList {
        state,
        loading: request.loading(),
    }
}
