// Copyright © 2025 Nipun Kumar

//! Offset/limit pagination state for the list pages.
//!
//! The server reports no total, so there is no upper bound on `Next`: walking
//! past the end just yields an empty page.

use crate::model::PageQuery;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 7] = [10, 20, 30, 50, 100, 200, 500];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Previous,
    Next,
    SetLimit(usize),
}

impl Default for PageState {
    fn default() -> Self {
        Self::with_limit(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            offset: 0,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.offset != 0
    }

    /// Changing the page size restarts from the first page, which keeps
    /// `offset` a multiple of `limit`.
    pub fn apply(self, event: PageEvent) -> Self {
        match event {
            PageEvent::Previous if self.can_go_previous() => Self {
                offset: self.offset.saturating_sub(self.limit),
                ..self
            },
            PageEvent::Previous => self,
            PageEvent::Next => Self {
                offset: self.offset + self.limit,
                ..self
            },
            PageEvent::SetLimit(limit) if limit.max(1) == self.limit => self,
            PageEvent::SetLimit(limit) => Self::with_limit(limit),
        }
    }

    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.limit, self.offset)
    }

    /// One-based page number for display.
    pub fn page_number(&self) -> usize {
        self.offset / self.limit + 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub page: PageState,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T> {
    Page(PageEvent),
    /// A fetch for `page` finished. Items for any other page are ignored.
    Loaded { page: PageState, items: Vec<T> },
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(PageState::default())
    }
}

impl<T> ListState<T> {
    pub fn new(page: PageState) -> Self {
        Self {
            page,
            items: Vec::new(),
        }
    }

    /// Pagination changes keep the current rows on screen until the next page
    /// lands; a load replaces them wholesale.
    pub fn apply(self, event: ListEvent<T>) -> Self {
        match event {
            ListEvent::Page(e) => Self {
                page: self.page.apply(e),
                ..self
            },
            ListEvent::Loaded { page, items } if page == self.page => Self { items, ..self },
            ListEvent::Loaded { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_is_disabled_only_on_first_page() {
        let page = PageState::default();
        assert!(!page.can_go_previous());
        assert_eq!(page.apply(PageEvent::Previous), page);

        let page = page.apply(PageEvent::Next);
        assert!(page.can_go_previous());
    }

    #[test]
    fn previous_steps_back_by_exactly_limit() {
        let page = PageState::with_limit(20)
            .apply(PageEvent::Next)
            .apply(PageEvent::Next);
        assert_eq!(page.offset, 40);
        assert_eq!(page.apply(PageEvent::Previous).offset, 20);
    }

    #[test]
    fn next_is_unbounded() {
        let mut page = PageState::default();
        for _ in 0..1000 {
            page = page.apply(PageEvent::Next);
        }
        assert_eq!(page.offset, 10_000);
        assert_eq!(page.page_number(), 1001);
    }

    #[test]
    fn changing_limit_restarts_from_first_page() {
        let page = PageState::default()
            .apply(PageEvent::Next)
            .apply(PageEvent::SetLimit(50));
        assert_eq!(page, PageState { limit: 50, offset: 0 });

        // Re-selecting the current size is not a change.
        let page = PageState::default().apply(PageEvent::Next);
        assert_eq!(page.apply(PageEvent::SetLimit(10)), page);
    }

    #[test]
    fn zero_limit_is_clamped() {
        assert_eq!(PageState::with_limit(0).limit, 1);
    }

    #[test]
    fn first_then_next_page_scenario() {
        let state: ListState<u32> = ListState::new(PageState::default());
        assert_eq!(state.page.query(), PageQuery::new(10, 0));

        let page_a: Vec<u32> = (1..=10).collect();
        let state = state.clone().apply(ListEvent::Loaded {
            page: state.page,
            items: page_a.clone(),
        });
        assert_eq!(state.items, page_a);

        let state = state.apply(ListEvent::Page(PageEvent::Next));
        assert_eq!(state.page.query(), PageQuery::new(10, 10));
        // Old rows stay until page B arrives.
        assert_eq!(state.items, page_a);

        let page_b: Vec<u32> = (11..=20).collect();
        let state = state.clone().apply(ListEvent::Loaded {
            page: state.page,
            items: page_b.clone(),
        });
        assert_eq!(state.items, page_b);
    }

    #[test]
    fn loads_replace_and_empty_page_renders_no_rows() {
        let state = ListState::new(PageState::default()).apply(ListEvent::Loaded {
            page: PageState::default(),
            items: vec![1, 2, 3],
        });
        let state = state.apply(ListEvent::Page(PageEvent::Next));
        let next = state.page;
        let state = state.apply(ListEvent::Loaded {
            page: next,
            items: vec![],
        });
        assert!(state.items.is_empty());
    }

    #[test]
    fn load_for_another_page_is_ignored() {
        let state = ListState::new(PageState::default()).apply(ListEvent::Page(PageEvent::Next));
        let state = state.apply(ListEvent::Loaded {
            page: PageState::default(),
            items: vec![1],
        });
        assert!(state.items.is_empty());
    }
}
