//! Category domain entity.

pub mod model;
pub mod repository;

pub use model::{Category, CategoryId, NewCategory};
pub use repository::CategoryRepository;
