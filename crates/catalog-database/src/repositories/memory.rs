//! Generic in-memory CRUD store.

use tracing::debug;

use catalog_core::error::RepositoryError;
use catalog_core::result::RepositoryResult;
use catalog_core::traits::{Entity, Repository};

/// A `Vec`-backed repository preserving insertion order.
///
/// Lookups are linear scans by identity.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: Vec<E>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store holding `items` in the given order.
    pub fn with_items(items: Vec<E>) -> Self {
        Self { items }
    }

    /// Stored items in order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &E::Id) -> RepositoryResult<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| RepositoryError::not_found(id))
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn insert(&mut self, entity: E) -> RepositoryResult<()> {
        debug!(id = %entity.id(), "Inserting entity");
        self.items.push(entity);
        Ok(())
    }

    fn find_by_id(&self, id: &E::Id) -> RepositoryResult<E> {
        let index = self.position(id)?;
        Ok(self.items[index].clone())
    }

    fn find_all(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.items.clone())
    }

    fn update(&mut self, entity: E) -> RepositoryResult<()> {
        let index = self.position(entity.id())?;
        debug!(id = %entity.id(), index, "Replacing entity");
        self.items[index] = entity;
        Ok(())
    }

    fn delete(&mut self, id: &E::Id) -> RepositoryResult<()> {
        let index = self.position(id)?;
        debug!(id = %id, index, "Removing entity");
        self.items.remove(index);
        Ok(())
    }
}
