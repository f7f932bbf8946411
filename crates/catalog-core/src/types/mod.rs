//! Core type definitions used across the Catalog workspace.

pub mod id;
pub mod pagination;
pub mod params;
pub mod sorting;

pub use id::Uuid;
pub use pagination::SearchResult;
pub use params::{DEFAULT_PAGE, DEFAULT_PER_PAGE, RawSearchParams, SearchParams};
pub use sorting::{Comparator, SortDirection, SortField, SortFields};
