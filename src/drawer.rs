// Copyright © 2025 Nipun Kumar

//! Open/closed state for the detail drawers.
//!
//! Every open gets a fresh session id. Responses are tagged with the session
//! they were requested for, and anything that lands for a session other than
//! the current one (the drawer was closed, or reopened on another row) is
//! dropped.

use crate::{model::PageQuery, paging::PageState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct OpenDrawer<K, T> {
    pub session: SessionId,
    pub key: K,
    pub page: PageState,
    pub items: Vec<T>,
    pub pending: bool,
    pub exhausted: bool,
    /// The last fetch failed; the next `LoadMore` retries the same page.
    pub failed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerState<K, T> {
    issued: u64,
    limit: usize,
    open: Option<OpenDrawer<K, T>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawerEvent<K, T> {
    Open(K),
    /// Swap the filter key while open, e.g. a new date for the same talker.
    Refilter(K),
    LoadMore,
    Loaded { session: SessionId, items: Vec<T> },
    Failed { session: SessionId },
    Close,
}

/// What to fetch for the drawer's current page.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerFetch<K> {
    pub session: SessionId,
    pub key: K,
    pub page: PageState,
}

impl<K: Clone, T> Default for DrawerState<K, T> {
    fn default() -> Self {
        Self::new(crate::paging::DEFAULT_PAGE_SIZE)
    }
}

impl<K: Clone, T> DrawerState<K, T> {
    pub fn new(limit: usize) -> Self {
        Self {
            issued: 0,
            limit: limit.max(1),
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn view(&self) -> Option<&OpenDrawer<K, T>> {
        self.open.as_ref()
    }

    pub fn key(&self) -> Option<&K> {
        self.open.as_ref().map(|o| &o.key)
    }

    pub fn items(&self) -> &[T] {
        self.open.as_ref().map(|o| o.items.as_slice()).unwrap_or(&[])
    }

    pub fn is_pending(&self) -> bool {
        self.open.as_ref().is_some_and(|o| o.pending)
    }

    pub fn can_load_more(&self) -> bool {
        self.open.as_ref().is_some_and(|o| !o.pending && !o.exhausted)
    }

    /// The fetch the view should issue, if one is outstanding.
    pub fn pending_fetch(&self) -> Option<DrawerFetch<K>> {
        let open = self.open.as_ref().filter(|o| o.pending)?;
        Some(DrawerFetch {
            session: open.session,
            key: open.key.clone(),
            page: open.page,
        })
    }

    pub fn apply(self, event: DrawerEvent<K, T>) -> Self {
        match event {
            DrawerEvent::Open(key) => self.start(key),
            DrawerEvent::Refilter(key) if self.is_open() => self.start(key),
            DrawerEvent::Refilter(_) => self,
            DrawerEvent::LoadMore if self.can_load_more() => self.map_open(|o| OpenDrawer {
                page: if o.failed {
                    o.page
                } else {
                    o.page.apply(crate::paging::PageEvent::Next)
                },
                pending: true,
                failed: false,
                ..o
            }),
            DrawerEvent::LoadMore => self,
            DrawerEvent::Loaded { session, items } if self.is_current(session) => {
                self.map_open(|mut o| {
                    o.exhausted = items.len() < o.page.limit;
                    o.items.extend(items);
                    o.pending = false;
                    o
                })
            }
            DrawerEvent::Failed { session } if self.is_current(session) => {
                self.map_open(|o| OpenDrawer {
                    pending: false,
                    failed: true,
                    ..o
                })
            }
            DrawerEvent::Loaded { .. } | DrawerEvent::Failed { .. } => self,
            DrawerEvent::Close => Self { open: None, ..self },
        }
    }

    fn is_current(&self, session: SessionId) -> bool {
        self.open.as_ref().is_some_and(|o| o.session == session)
    }

    fn start(self, key: K) -> Self {
        let issued = self.issued + 1;
        Self {
            issued,
            limit: self.limit,
            open: Some(OpenDrawer {
                session: SessionId(issued),
                key,
                page: PageState::with_limit(self.limit),
                items: Vec::new(),
                pending: true,
                exhausted: false,
                failed: false,
            }),
        }
    }

    fn map_open(self, f: impl FnOnce(OpenDrawer<K, T>) -> OpenDrawer<K, T>) -> Self {
        Self {
            open: self.open.map(f),
            ..self
        }
    }
}

impl<K> DrawerFetch<K> {
    pub fn query(&self) -> PageQuery {
        self.page.query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Drawer = DrawerState<&'static str, u32>;

    fn loaded(d: &Drawer, items: Vec<u32>) -> DrawerEvent<&'static str, u32> {
        DrawerEvent::Loaded {
            session: d.view().unwrap().session,
            items,
        }
    }

    #[test]
    fn starts_closed_with_nothing_to_fetch() {
        let d = Drawer::default();
        assert!(!d.is_open());
        assert!(d.pending_fetch().is_none());
        assert!(d.items().is_empty());
    }

    #[test]
    fn open_resets_then_populates_from_first_page() {
        let d = Drawer::default().apply(DrawerEvent::Open("wxid_a"));
        let fetch = d.pending_fetch().unwrap();
        assert_eq!(fetch.key, "wxid_a");
        assert_eq!(fetch.query(), PageQuery::new(10, 0));
        assert!(d.items().is_empty());

        let d = d.apply(DrawerEvent::Loaded {
            session: fetch.session,
            items: (1..=10).collect(),
        });
        assert_eq!(d.items().len(), 10);
        assert!(!d.is_pending());
    }

    #[test]
    fn load_more_appends() {
        let d = Drawer::default().apply(DrawerEvent::Open("wxid_a"));
        let d = d.clone().apply(loaded(&d, (1..=10).collect()));

        let d = d.apply(DrawerEvent::LoadMore);
        let fetch = d.pending_fetch().unwrap();
        assert_eq!(fetch.query(), PageQuery::new(10, 10));

        let d = d.clone().apply(loaded(&d, (11..=15).collect()));
        assert_eq!(d.items(), (1..=15).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn load_more_waits_for_pending_and_stops_when_exhausted() {
        let d = Drawer::default().apply(DrawerEvent::Open("wxid_a"));
        // Still pending: a second click does not advance the offset.
        let d = d.apply(DrawerEvent::LoadMore);
        assert_eq!(d.pending_fetch().unwrap().page.offset, 0);

        let d = d.clone().apply(loaded(&d, vec![1, 2, 3]));
        assert!(!d.can_load_more());
        assert_eq!(d.clone().apply(DrawerEvent::LoadMore), d);
    }

    #[test]
    fn close_then_reopen_starts_from_zero() {
        let d = Drawer::default().apply(DrawerEvent::Open("wxid_a"));
        let d = d.clone().apply(loaded(&d, (1..=10).collect()));
        let d = d.apply(DrawerEvent::LoadMore);
        let d = d.clone().apply(loaded(&d, (11..=20).collect()));

        let d = d.apply(DrawerEvent::Close);
        assert!(!d.is_open());
        assert!(d.items().is_empty());

        let d = d.apply(DrawerEvent::Open("wxid_a"));
        assert!(d.items().is_empty());
        assert_eq!(d.pending_fetch().unwrap().page.offset, 0);
    }

    #[test]
    fn late_response_after_close_is_discarded() {
        let d = Drawer::default().apply(DrawerEvent::Open("wxid_a"));
        let stale = d.pending_fetch().unwrap().session;

        let closed = d.apply(DrawerEvent::Close);
        let closed = closed.apply(DrawerEvent::Loaded {
            session: stale,
            items: vec![1],
        });
        assert!(!closed.is_open());

        let reopened = closed.apply(DrawerEvent::Open("wxid_b"));
        let reopened = reopened.apply(DrawerEvent::Loaded {
            session: stale,
            items: vec![1],
        });
        assert!(reopened.items().is_empty());
        assert!(reopened.is_pending());
    }

    #[test]
    fn refilter_restarts_with_new_key() {
        let d = Drawer::default().apply(DrawerEvent::Open("2025-03-01"));
        let d = d.clone().apply(loaded(&d, (1..=10).collect()));
        let d = d.apply(DrawerEvent::Refilter("2025-03-02"));

        assert_eq!(d.key(), Some(&"2025-03-02"));
        assert!(d.items().is_empty());
        assert_eq!(d.pending_fetch().unwrap().page.offset, 0);

        // Refilter does nothing on a closed drawer.
        let closed = Drawer::default().apply(DrawerEvent::Refilter("x"));
        assert!(!closed.is_open());
    }

    #[test]
    fn failure_clears_pending_for_current_session_only() {
        let d = Drawer::default().apply(DrawerEvent::Open("wxid_a"));
        let d = d.apply(DrawerEvent::Failed {
            session: SessionId(99),
        });
        assert!(d.is_pending());

        let session = d.pending_fetch().unwrap().session;
        let d = d.apply(DrawerEvent::Failed { session });
        assert!(!d.is_pending());
        assert!(d.can_load_more());

        // Load More after a failure retries the page that failed.
        let d = d.apply(DrawerEvent::LoadMore);
        assert_eq!(d.pending_fetch().unwrap().page.offset, 0);
        assert!(!d.view().unwrap().failed);
    }
}
