//! # catalog-service
//!
//! Use-case layer for Catalog. Each use case owns a handle to the
//! repository it needs, receives typed input, and returns output DTOs.
//!
//! Use cases follow constructor injection: all dependencies are provided
//! at construction time. Repositories are shared through a single lock
//! ([`SharedRepository`]) because the stores themselves are unsynchronized.

pub mod category;
pub mod pagination;
pub mod shared;

pub use category::{
    CategoryOutput, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase,
    ListCategoriesUseCase, UpdateCategoryUseCase,
};
pub use pagination::{PaginationOutput, SearchInput};
pub use shared::{SharedRepository, share};
