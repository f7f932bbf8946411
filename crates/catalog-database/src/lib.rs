//! # catalog-database
//!
//! In-memory repository implementations for Catalog entities, including
//! the generic filter → sort → paginate search pipeline.
//!
//! The stores here are plain values with no internal locking. Share one
//! across tasks by wrapping it in a lock owned by the caller.

pub mod repositories;

pub use repositories::{
    CategoryInMemoryRepository, CategorySearchPolicy, InMemoryRepository,
    InMemorySearchableRepository, SearchPolicy,
};
