use tracing::{
    info,
    warn,
};

use super::{
    pagination::Pager,
    sort::{
        sorted,
        SortKey,
    },
};
use crate::core::{
    ApiError,
    RequestId,
    RequestSeq,
    Restaurant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fetching,
    Ready,
}

/// Category browser: one fetched slice of restaurants, re-sorted and paged locally.
#[derive(Debug)]
pub struct ListingState {
    category: String,
    phase: Phase,
    fetched: Vec<Restaurant>,
    items: Vec<Restaurant>,
    sort: SortKey,
    pager: Pager,
    seq: RequestSeq,
    error: Option<ApiError>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            category: String::new(),
            phase: Phase::Ready,
            fetched: Vec::new(),
            items: Vec::new(),
            sort: SortKey::default(),
            pager: Pager::default(),
            seq: RequestSeq::new(),
            error: None,
        }
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.items.len())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last fetch failure, shown with a retry button until the next success.
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Switches to a category and issues the id for its fetch. The page is
    /// kept, and only pulled back if the new list has fewer pages.
    pub fn select_category(&mut self, category: impl Into<String>) -> RequestId {
        self.category = category.into();
        self.refetch()
    }

    pub fn refetch(&mut self) -> RequestId {
        self.phase = Phase::Fetching;
        self.seq.issue()
    }

    /// Applies a category fetch. Superseded responses are dropped and `false` returned.
    pub fn finish_fetch(&mut self, id: RequestId, result: Result<Vec<Restaurant>, ApiError>) -> bool {
        if !self.seq.is_current(id) {
            info!("Dropping superseded listing response {id}");
            return false;
        }

        self.phase = Phase::Ready;
        match result {
            Ok(restaurants) => {
                info!("Listing '{}' loaded {} restaurants", self.category, restaurants.len());
                self.fetched = restaurants;
                self.error = None;
            }
            Err(e) => {
                warn!("Listing '{}' fetch failed: {e}", self.category);
                self.fetched = Vec::new();
                self.error = Some(e);
            }
        }
        self.items = sorted(&self.fetched, self.sort);
        self.pager.clamp(self.items.len());
        true
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.items = sorted(&self.fetched, key);
    }

    pub fn items(&self) -> &[Restaurant] {
        &self.items
    }

    pub fn visible(&self) -> &[Restaurant] {
        self.pager.slice(&self.items)
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next(self.items.len())
    }

    pub fn has_previous(&self) -> bool {
        self.pager.has_previous()
    }

    pub fn next_page(&mut self) {
        self.pager.next();
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
    }
}
