//! List query extractor.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde_json::Value;

use catalog_core::error::AppError;
use catalog_service::SearchInput;

use crate::error::ApiError;

/// Search query string (`page`, `per_page`, `sort`, `sort_dir`, `filter`)
/// captured as raw text.
///
/// Values are not parsed here; normalization happens in the search
/// parameters, so a malformed page never produces a 4xx.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery(pub SearchInput);

impl SearchQuery {
    /// Build the raw search input from query pairs. Unknown keys are ignored.
    pub fn from_pairs(mut pairs: HashMap<String, String>) -> Self {
        let mut take = |key: &str| pairs.remove(key).map(Value::String);
        Self(SearchInput {
            page: take("page"),
            per_page: take("per_page"),
            sort: take("sort"),
            sort_dir: take("sort_dir"),
            filter: take("filter"),
        })
    }

    /// The raw search input.
    pub fn into_inner(self) -> SearchInput {
        self.0
    }
}

impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid query string: {e}")))?;
        Ok(Self::from_pairs(pairs))
    }
}
