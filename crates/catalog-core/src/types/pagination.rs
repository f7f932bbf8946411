//! Search result page and pagination arithmetic.

use serde::{Deserialize, Serialize};

use super::params::SearchParams;
use super::sorting::SortDirection;

/// Number of pages needed for `total` items, never less than one.
pub fn last_page(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Return the `[offset, offset + per_page)` window of `items`, clamped to
/// the sequence bounds. Out-of-range pages yield an empty vector.
pub fn paginate<T>(items: Vec<T>, offset: u64, per_page: u64) -> Vec<T> {
    let start = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = usize::try_from(per_page).unwrap_or(usize::MAX);
    items.into_iter().skip(start).take(take).collect()
}

/// One page of search results plus pagination metadata.
///
/// `total` counts every item that matched the filter, not just the ones on
/// this page. Serializes to a flat map with `items`, `total`,
/// `current_page`, `per_page`, `last_page`, `sort`, `sort_dir` and `filter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<E, F = String> {
    items: Vec<E>,
    total: u64,
    current_page: u64,
    per_page: u64,
    last_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<E, F> SearchResult<E, F> {
    /// Build a result, deriving `last_page` from `total` and `per_page`.
    pub fn new(
        items: Vec<E>,
        total: u64,
        current_page: u64,
        per_page: u64,
        sort: Option<String>,
        sort_dir: Option<SortDirection>,
        filter: Option<F>,
    ) -> Self {
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: last_page(total, per_page),
            sort,
            sort_dir,
            filter,
        }
    }

    /// Build a result echoing the sort and filter of `params`.
    pub fn from_params(items: Vec<E>, total: u64, params: &SearchParams<F>) -> Self
    where
        F: Clone,
    {
        Self::new(
            items,
            total,
            params.page(),
            params.per_page(),
            params.sort().map(str::to_string),
            params.sort_dir(),
            params.filter().cloned(),
        )
    }

    /// Items on this page.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Consume the result, returning the page items.
    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    /// Number of items that matched the filter.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Page this result represents.
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Requested page size.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Last page number, at least one.
    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// Echoed sort field.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Echoed sort direction.
    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    /// Echoed filter.
    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Convert every item, keeping the metadata.
    pub fn map_items<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T, F> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        }
    }
}
