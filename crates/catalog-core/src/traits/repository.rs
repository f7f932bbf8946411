//! Repository contracts every backing store implements.
//!
//! The in-memory store in `catalog-database` is the reference
//! implementation. Any other backend must behave identically: `total`
//! counts filtered items before pagination, and pagination is stable and
//! deterministic for identical input.

use crate::result::RepositoryResult;
use crate::traits::entity::Entity;
use crate::types::pagination::SearchResult;
use crate::types::params::SearchParams;

/// Basic CRUD repository.
///
/// Operations are synchronous and run to completion. Writers take
/// `&mut self`; sharing a store across tasks requires external locking.
pub trait Repository<E: Entity>: Send + Sync {
    /// Append an entity. No duplicate-identity check is performed.
    fn insert(&mut self, entity: E) -> RepositoryResult<()>;

    /// Find an entity by identity.
    ///
    /// Fails with `NotFound(id)` when nothing matches.
    fn find_by_id(&self, id: &E::Id) -> RepositoryResult<E>;

    /// All stored entities in insertion order.
    fn find_all(&self) -> RepositoryResult<Vec<E>>;

    /// Replace the stored entity with the same identity, keeping its
    /// position.
    ///
    /// Fails with `NotFound(id)` and leaves the store unchanged when
    /// nothing matches.
    fn update(&mut self, entity: E) -> RepositoryResult<()>;

    /// Remove the entity with the given identity.
    ///
    /// Fails with `NotFound(id)` and leaves the store unchanged when
    /// nothing matches.
    fn delete(&mut self, id: &E::Id) -> RepositoryResult<()>;
}

/// A repository that also supports filter → sort → paginate searches.
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Filter value type accepted by [`SearchableRepository::search`].
    type Filter: Clone + Send + Sync;

    /// Field names accepted as sort keys.
    fn sortable_fields(&self) -> Vec<&'static str>;

    /// Run a search.
    fn search(
        &self,
        params: &SearchParams<Self::Filter>,
    ) -> RepositoryResult<SearchResult<E, Self::Filter>>;
}
