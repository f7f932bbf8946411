//! Sorting types for searchable repositories.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Parse a direction case-insensitively. Anything other than
    /// `asc`/`desc` falls back to [`SortDirection::Asc`].
    pub fn parse_lenient(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Return the lowercase keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort specification consisting of a field name and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Ascending comparison between two entities on one field.
pub type Comparator<E> = fn(&E, &E) -> Ordering;

/// Allow-list of sortable field names, each bound to a typed comparator.
///
/// Registration order is preserved so [`SortFields::names`] is stable.
pub struct SortFields<E> {
    fields: Vec<(&'static str, Comparator<E>)>,
}

impl<E> SortFields<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Register a field. Re-registering a name replaces its comparator.
    pub fn with(mut self, name: &'static str, compare: Comparator<E>) -> Self {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = compare,
            None => self.fields.push((name, compare)),
        }
        self
    }

    /// Look up the comparator for a field name.
    pub fn get(&self, name: &str) -> Option<Comparator<E>> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, compare)| *compare)
    }

    /// Whether a field name is allow-listed.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Allow-listed field names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(n, _)| *n).collect()
    }

    /// Stable-sort `items` by `field` in `direction`.
    ///
    /// Returns `false` and leaves `items` untouched when the field is not
    /// allow-listed.
    pub fn sort(&self, items: &mut [E], field: &str, direction: SortDirection) -> bool {
        match self.get(field) {
            Some(compare) => {
                items.sort_by(|a, b| direction.apply(compare(a, b)));
                true
            }
            None => false,
        }
    }
}

impl<E> Default for SortFields<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for SortFields<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortFields")
            .field("fields", &self.names())
            .finish()
    }
}
