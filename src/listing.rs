//! List-fetch state machine shared by every admin list surface.
//!
//! A [`ListController`] owns the query (page, search, filters) and the last
//! committed page of results. Mutating operations return a [`FetchSpec`]
//! describing the request the caller must run; the caller hands the outcome
//! back through [`ListController::commit`]. Keeping the controller free of IO
//! lets the TUI run fetches on worker threads and lets tests drive it with
//! canned envelopes.
//!
//! Every fetch gets a monotonically increasing sequence number and only the
//! newest one may commit. A slow page-2 response that lands after a newer
//! search response is dropped entirely, no matter the order the server
//! answered in.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::model::ListEnvelope;

mod debounce;
mod page;

pub use self::debounce::Debounce;
pub use self::page::{ListPage, total_pages_for};

/// Rows per page in the admin views.
pub const ADMIN_PAGE_SIZE: u32 = 10;
/// Rows per page in the public story gallery, which calls the same API.
pub const GALLERY_PAGE_SIZE: u32 = 6;
/// Trailing-edge delay between the last search keystroke and the fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
/// Filter value meaning "no filter". Never sent to the server.
pub const FILTER_ALL: &str = "all";

/// The query half of a list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn first_page(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            search: String::new(),
            filters: BTreeMap::new(),
        }
    }

    /// Stores a filter value, treating `""` and `"all"` as removal.
    pub fn set_filter(&mut self, name: &str, value: &str) {
        if value.is_empty() || value == FILTER_ALL {
            self.filters.remove(name);
        } else {
            self.filters.insert(name.to_string(), value.to_string());
        }
    }

    /// Query-string pairs for the request. Blank search and sentinel filter
    /// values are omitted rather than sent empty.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut out = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.page_size.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            out.push(("search".to_string(), search.to_string()));
        }
        for (name, value) in &self.filters {
            if value.is_empty() || value == FILTER_ALL {
                continue;
            }
            out.push((name.clone(), value.clone()));
        }
        out
    }
}

/// A request the caller must run: fetch `query`, then hand the outcome to
/// [`ListController::commit`] together with `seq`.
#[derive(Clone, Debug)]
pub struct FetchSpec {
    pub seq: u64,
    pub query: ListQuery,
}

pub struct ListController<T> {
    query: ListQuery,
    results: ListPage<T>,
    loading: bool,
    error: Option<String>,
    seq: u64,
    pending_search: Debounce,
}

impl<T> ListController<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: ListQuery::first_page(page_size),
            results: ListPage::empty(),
            loading: false,
            error: None,
            seq: 0,
            pending_search: Debounce::new(SEARCH_DEBOUNCE),
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.results.items
    }

    /// Applies a fetch outcome. Returns false (and changes nothing, not even
    /// the loading flag) when `seq` is not the most recently issued fetch.
    pub fn commit(&mut self, seq: u64, outcome: Result<ListEnvelope<T>, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        match outcome {
            Ok(envelope) => {
                self.results = ListPage::compute(
                    envelope.items,
                    envelope.total,
                    self.query.page,
                    self.query.page_size,
                );
                self.error = None;
            }
            Err(message) => {
                self.results = ListPage::empty();
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }

    fn issue(&mut self) -> FetchSpec {
        self.loading = true;
        self.error = None;
        self.seq += 1;
        FetchSpec {
            seq: self.seq,
            query: self.query.clone(),
        }
    }
}

/// Type-independent controller surface, usable as a trait object so the TUI
/// can drive whichever list view is current without knowing its row type.
pub trait ListOps {
    /// Records the new search text and arms the trailing-edge debounce; the
    /// fetch itself comes out of a later [`ListOps::poll`]. Resets to page 1.
    fn set_search(&mut self, text: &str, now: Instant);

    /// Fires the pending debounced search once its deadline has passed.
    fn poll(&mut self, now: Instant) -> Option<FetchSpec>;

    /// Sets (or, for `""`/`"all"`, removes) a filter and fetches immediately
    /// from page 1. A pending debounced search is disarmed; this fetch
    /// already carries the latest search text.
    fn set_filter(&mut self, name: &str, value: &str) -> FetchSpec;

    fn clear_filters(&mut self) -> FetchSpec;

    /// No-op when a fetch is in flight or the page is outside `1..=total_pages`.
    fn go_to_page(&mut self, page: u32) -> Option<FetchSpec>;

    fn next_page(&mut self) -> Option<FetchSpec>;

    fn prev_page(&mut self) -> Option<FetchSpec>;

    /// Refetches the current query. Allowed while loading; the sequence guard
    /// discards whichever response loses the race.
    fn refresh(&mut self) -> FetchSpec;

    fn loading(&self) -> bool;
    fn error(&self) -> Option<&str>;
    fn page(&self) -> u32;
    fn total(&self) -> u64;
    fn total_pages(&self) -> u32;
    fn has_next(&self) -> bool;
    fn has_prev(&self) -> bool;
    fn search(&self) -> &str;
    fn search_pending(&self) -> bool;
    fn filter(&self, name: &str) -> Option<&str>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ListOps for ListController<T> {
    fn set_search(&mut self, text: &str, now: Instant) {
        self.query.search = text.to_string();
        self.query.page = 1;
        self.pending_search.arm(now);
    }

    fn poll(&mut self, now: Instant) -> Option<FetchSpec> {
        if !self.pending_search.fire(now) {
            return None;
        }
        self.query.page = 1;
        Some(self.issue())
    }

    fn set_filter(&mut self, name: &str, value: &str) -> FetchSpec {
        self.query.set_filter(name, value);
        self.query.page = 1;
        self.pending_search.disarm();
        self.issue()
    }

    fn clear_filters(&mut self) -> FetchSpec {
        self.query.filters.clear();
        self.query.page = 1;
        self.pending_search.disarm();
        self.issue()
    }

    fn go_to_page(&mut self, page: u32) -> Option<FetchSpec> {
        if self.loading || page < 1 || page > self.results.total_pages {
            return None;
        }
        self.query.page = page;
        self.pending_search.disarm();
        Some(self.issue())
    }

    fn next_page(&mut self) -> Option<FetchSpec> {
        self.go_to_page(self.query.page.saturating_add(1))
    }

    fn prev_page(&mut self) -> Option<FetchSpec> {
        self.go_to_page(self.query.page.saturating_sub(1))
    }

    fn refresh(&mut self) -> FetchSpec {
        self.pending_search.disarm();
        self.issue()
    }

    fn loading(&self) -> bool {
        self.loading
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn page(&self) -> u32 {
        self.query.page
    }

    fn total(&self) -> u64 {
        self.results.total
    }

    fn total_pages(&self) -> u32 {
        self.results.total_pages
    }

    fn has_next(&self) -> bool {
        self.results.has_next
    }

    fn has_prev(&self) -> bool {
        self.results.has_prev
    }

    fn search(&self) -> &str {
        &self.query.search
    }

    fn search_pending(&self) -> bool {
        self.pending_search.armed()
    }

    fn filter(&self, name: &str) -> Option<&str> {
        self.query.filters.get(name).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.results.items.len()
    }
}

#[cfg(test)]
#[path = "tests/listing/controller_tests.rs"]
mod tests;
