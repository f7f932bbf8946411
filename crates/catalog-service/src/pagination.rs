//! List input and paginated output shared by list use cases.

use serde::{Deserialize, Serialize};

use catalog_core::types::pagination::SearchResult;
use catalog_core::types::params::RawSearchParams;

/// Raw list input; normalized by the repository search parameters.
pub type SearchInput = RawSearchParams;

/// One page of output items plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationOutput<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Items matching the filter across all pages.
    pub total: u64,
    /// Current page (1-based).
    pub current_page: u64,
    /// Last page (at least 1).
    pub last_page: u64,
    /// Items per page.
    pub per_page: u64,
}

impl<T> PaginationOutput<T> {
    /// Map a search result's items into output DTOs.
    pub fn from_result<E, F>(result: SearchResult<E, F>, to_output: impl FnMut(E) -> T) -> Self {
        let result = result.map_items(to_output);
        Self {
            total: result.total(),
            current_page: result.current_page(),
            last_page: result.last_page(),
            per_page: result.per_page(),
            items: result.into_items(),
        }
    }
}
