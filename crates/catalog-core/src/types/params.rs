//! Search input normalization.
//!
//! [`RawSearchParams`] carries whatever the caller supplied, with any JSON
//! type in any field. [`SearchParams`] is the canonical form the search
//! pipeline runs on. Converting raw into canonical never fails: every
//! malformed value collapses to a default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::sorting::SortDirection;

/// Page used when the supplied page is missing, non-numeric or `<= 0`.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the supplied page size is missing, non-numeric or `< 1`.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Unnormalized search input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSearchParams {
    /// Page number, any JSON value.
    pub page: Option<Value>,
    /// Page size, any JSON value.
    pub per_page: Option<Value>,
    /// Sort field, any JSON value.
    pub sort: Option<Value>,
    /// Sort direction, any JSON value.
    pub sort_dir: Option<Value>,
    /// Filter, any JSON value.
    pub filter: Option<Value>,
}

impl RawSearchParams {
    /// Set the page.
    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: impl Into<Value>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    /// Set the sort field.
    pub fn sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the sort direction.
    pub fn sort_dir(mut self, sort_dir: impl Into<Value>) -> Self {
        self.sort_dir = Some(sort_dir.into());
        self
    }

    /// Set the filter.
    pub fn filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Canonical search parameters.
///
/// Invariants: `page >= 1`, `per_page >= 1`, `sort` is never empty, and
/// `sort_dir` is `Some` exactly when `sort` is `Some`. Deserialization goes
/// through [`RawSearchParams`], so it normalizes like [`SearchParams::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSearchParams", bound(deserialize = "F: From<String>"))]
pub struct SearchParams<F = String> {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F> SearchParams<F> {
    /// 1-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Items per page.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Requested sort field, if any.
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Sort direction; set only when a sort field is set.
    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    /// Filter value, if any.
    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Offset of the first item on the requested page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Return a copy with a different page, keeping every other field.
    pub fn with_page(&self, page: u64) -> Self
    where
        F: Clone,
    {
        Self {
            page: page.max(DEFAULT_PAGE),
            ..self.clone()
        }
    }
}

impl<F: From<String>> SearchParams<F> {
    /// Normalize raw input into canonical parameters.
    pub fn from_raw(raw: RawSearchParams) -> Self {
        let page = match to_int(raw.page.as_ref()) {
            n if n <= 0 => DEFAULT_PAGE,
            n => n as u64,
        };
        let per_page = match to_int(raw.per_page.as_ref()) {
            n if n < 1 => DEFAULT_PER_PAGE,
            n => n as u64,
        };
        let sort = to_text(raw.sort.as_ref());
        let sort_dir = sort.as_ref().map(|_| {
            raw.sort_dir
                .as_ref()
                .and_then(|v| v.as_str())
                .map(SortDirection::parse_lenient)
                .unwrap_or_default()
        });
        let filter = to_text(raw.filter.as_ref()).map(F::from);

        Self {
            page,
            per_page,
            sort,
            sort_dir,
            filter,
        }
    }
}

impl<F: From<String>> From<RawSearchParams> for SearchParams<F> {
    fn from(raw: RawSearchParams) -> Self {
        Self::from_raw(raw)
    }
}

impl<F: From<String>> Default for SearchParams<F> {
    fn default() -> Self {
        Self::from_raw(RawSearchParams::default())
    }
}

impl<F: ToString> From<&SearchParams<F>> for RawSearchParams {
    fn from(params: &SearchParams<F>) -> Self {
        Self {
            page: Some(Value::from(params.page)),
            per_page: Some(Value::from(params.per_page)),
            sort: params.sort.clone().map(Value::String),
            sort_dir: params.sort_dir.map(|d| Value::String(d.as_str().to_string())),
            filter: params.filter.as_ref().map(|f| Value::String(f.to_string())),
        }
    }
}

/// Lenient integer conversion; anything unconvertible is `0`.
fn to_int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

/// String form of a value; `null`, missing and `""` are unset.
fn to_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
