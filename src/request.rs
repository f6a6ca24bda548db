// Copyright © 2025 Nipun Kumar

//! In-flight tracking for async data calls.
//!
//! Every call gets a ticket from a monotonically increasing counter. Only the
//! most recently issued ticket may deliver its result; anything older that
//! settles afterwards is reported as superseded and dropped by the caller.

use std::{future::Future, rc::Rc};

use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::api::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Latest,
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestTracker {
    latest: u64,
    pending: bool,
}

impl RequestTracker {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.pending = true;
        Ticket(self.latest)
    }

    /// Called on success and on failure alike.
    pub fn settle(&mut self, ticket: Ticket) -> Settlement {
        if ticket.0 == self.latest {
            self.pending = false;
            Settlement::Latest
        } else {
            Settlement::Superseded
        }
    }

    /// True while the latest issued call has not settled.
    pub fn in_flight(&self) -> bool {
        self.pending
    }

    pub fn issued(&self) -> u64 {
        self.latest
    }
}

type Service<P, R> = Rc<dyn Fn(P) -> LocalBoxFuture<'static, ApiResult<R>>>;

pub struct UseRequest<P: 'static, R: 'static> {
    tracker: Signal<RequestTracker>,
    service: CopyValue<Service<P, R>>,
}

impl<P: 'static, R: 'static> Clone for UseRequest<P, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static, R: 'static> Copy for UseRequest<P, R> {}

impl<P: 'static, R: 'static> UseRequest<P, R> {
    pub fn loading(&self) -> bool {
        self.tracker.read().in_flight()
    }

    /// Runs the wrapped call. `Ok(None)` means a later `run` was issued before
    /// this one settled and its result has been discarded.
    pub async fn run(self, params: P) -> ApiResult<Option<R>> {
        let mut tracker = self.tracker;
        let ticket = tracker.write().begin();
        let mut guard = SettleOnDrop {
            tracker,
            ticket: Some(ticket),
        };
        let service = self.service.cloned();
        let result = service(params).await;
        guard.ticket = None;
        match tracker.write().settle(ticket) {
            Settlement::Latest => result.map(Some),
            Settlement::Superseded => Ok(None),
        }
    }
}

/// Settles the ticket if the future running it is dropped before completion,
/// e.g. when a resource restarts or its component unmounts.
struct SettleOnDrop {
    tracker: Signal<RequestTracker>,
    ticket: Option<Ticket>,
}

impl Drop for SettleOnDrop {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take()
            && let Ok(mut tracker) = self.tracker.try_write()
        {
            tracker.settle(ticket);
        }
    }
}

pub fn use_request<P, R, F, Fut>(f: F) -> UseRequest<P, R>
where
    P: 'static,
    R: 'static,
    F: Fn(P) -> Fut + 'static,
    Fut: Future<Output = ApiResult<R>> + 'static,
{
    let tracker = use_signal(RequestTracker::default);
    let service = use_hook(move || {
        let service: Service<P, R> = Rc::new(move |p: P| f(p).boxed_local());
        CopyValue::new(service)
    });
    UseRequest { tracker, service }
}
