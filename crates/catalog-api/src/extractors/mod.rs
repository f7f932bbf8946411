//! Custom Axum extractors.

pub mod json;
pub mod search;

pub use json::JsonBody;
pub use search::SearchQuery;
