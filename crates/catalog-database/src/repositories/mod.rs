//! Repository implementations for all Catalog entities.

pub mod category;
pub mod memory;
pub mod searchable;

pub use category::{CategoryInMemoryRepository, CategorySearchPolicy};
pub use memory::InMemoryRepository;
pub use searchable::{InMemorySearchableRepository, SearchPolicy};
