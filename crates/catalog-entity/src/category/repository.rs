//! Domain-level repository contract for categories.

use catalog_core::traits::SearchableRepository;

use super::model::Category;

/// A searchable category store filtering by text.
///
/// Blanket-implemented for every searchable category repository, so
/// backends only implement [`SearchableRepository`].
pub trait CategoryRepository: SearchableRepository<Category, Filter = String> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, Filter = String> {}
