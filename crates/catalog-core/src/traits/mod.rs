//! Core traits defined in `catalog-core` and implemented by other crates.

pub mod entity;
pub mod repository;
pub mod service;

pub use entity::Entity;
pub use repository::{Repository, SearchableRepository};
pub use service::UseCase;
