//! Generic in-memory searchable store and its filter → sort → paginate
//! pipeline.
//!
//! Entity types plug in through a [`SearchPolicy`]; the pipeline itself is
//! written once here.

use tracing::{debug, warn};

use catalog_core::result::RepositoryResult;
use catalog_core::traits::{Entity, Repository, SearchableRepository};
use catalog_core::types::pagination::{SearchResult, paginate};
use catalog_core::types::params::SearchParams;
use catalog_core::types::sorting::{SortDirection, SortField, SortFields};

use super::memory::InMemoryRepository;

/// Per-entity search behaviour.
pub trait SearchPolicy<E: Entity>: Send + Sync {
    /// Filter value type.
    type Filter: Clone + Send + Sync;

    /// Whether `item` matches `filter`.
    fn matches(&self, item: &E, filter: &Self::Filter) -> bool;

    /// Allow-listed sort fields and their comparators.
    fn sort_fields(&self) -> &SortFields<E>;

    /// Ordering used when no allow-listed sort field is requested: either
    /// `sort` is unset, or it names a field missing from
    /// [`SearchPolicy::sort_fields`]. Unknown fields never leave the
    /// filtered order as is.
    ///
    /// The field must be registered in [`SearchPolicy::sort_fields`].
    fn default_sort(&self) -> SortField;

    /// Keep the items matching `filter`, in their original order. An unset
    /// filter returns the input unchanged.
    fn apply_filter(&self, items: Vec<E>, filter: Option<&Self::Filter>) -> Vec<E> {
        match filter {
            Some(filter) => items
                .into_iter()
                .filter(|item| self.matches(item, filter))
                .collect(),
            None => items,
        }
    }
}

/// In-memory store with search, parameterized by a [`SearchPolicy`].
#[derive(Debug, Clone)]
pub struct InMemorySearchableRepository<E, P> {
    store: InMemoryRepository<E>,
    policy: P,
}

impl<E, P> InMemorySearchableRepository<E, P>
where
    E: Entity,
    P: SearchPolicy<E>,
{
    /// Create an empty store using `policy`.
    pub fn new(policy: P) -> Self {
        Self {
            store: InMemoryRepository::new(),
            policy,
        }
    }

    /// Create a store holding `items` in the given order.
    pub fn with_items(policy: P, items: Vec<E>) -> Self {
        Self {
            store: InMemoryRepository::with_items(items),
            policy,
        }
    }

    /// Stored items in insertion order.
    pub fn items(&self) -> &[E] {
        self.store.items()
    }

    /// The search policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Stable-sort `items` by the requested field, or by the policy's
    /// default ordering when `sort` is unset or not allow-listed.
    pub fn apply_sort(
        &self,
        mut items: Vec<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<E> {
        let fields = self.policy.sort_fields();
        match sort {
            Some(field) if fields.contains(field) => {
                fields.sort(&mut items, field, sort_dir.unwrap_or_default());
            }
            requested => {
                let fallback = self.policy.default_sort();
                if let Some(field) = requested {
                    debug!(field, fallback = %fallback.field, "Sort field not sortable, using default order");
                }
                if !fields.sort(&mut items, &fallback.field, fallback.direction) {
                    warn!(field = %fallback.field, "Default sort field is not registered, keeping filter order");
                }
            }
        }
        items
    }
}

impl<E, P> Repository<E> for InMemorySearchableRepository<E, P>
where
    E: Entity,
    P: SearchPolicy<E>,
{
    fn insert(&mut self, entity: E) -> RepositoryResult<()> {
        self.store.insert(entity)
    }

    fn find_by_id(&self, id: &E::Id) -> RepositoryResult<E> {
        self.store.find_by_id(id)
    }

    fn find_all(&self) -> RepositoryResult<Vec<E>> {
        self.store.find_all()
    }

    fn update(&mut self, entity: E) -> RepositoryResult<()> {
        self.store.update(entity)
    }

    fn delete(&mut self, id: &E::Id) -> RepositoryResult<()> {
        self.store.delete(id)
    }
}

impl<E, P> SearchableRepository<E> for InMemorySearchableRepository<E, P>
where
    E: Entity,
    P: SearchPolicy<E>,
{
    type Filter = P::Filter;

    fn sortable_fields(&self) -> Vec<&'static str> {
        self.policy.sort_fields().names()
    }

    fn search(
        &self,
        params: &SearchParams<Self::Filter>,
    ) -> RepositoryResult<SearchResult<E, Self::Filter>> {
        let filtered = self
            .policy
            .apply_filter(self.store.items().to_vec(), params.filter());
        let total = filtered.len() as u64;
        let sorted = self.apply_sort(filtered, params.sort(), params.sort_dir());
        let page = paginate(sorted, params.offset(), params.per_page());

        debug!(
            total,
            page = params.page(),
            per_page = params.per_page(),
            returned = page.len(),
            "Search complete"
        );

        Ok(SearchResult::from_params(page, total, params))
    }
}
