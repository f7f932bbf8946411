//! # catalog-entity
//!
//! Domain entity models for Catalog. Entities are immutable values
//! identified by a typed ID; "mutating" operations consume the entity and
//! return the updated value, which callers persist explicitly.

pub mod category;

pub use category::{Category, CategoryId, CategoryRepository, NewCategory};
