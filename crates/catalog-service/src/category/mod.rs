//! Category use cases and DTOs.

pub mod dto;
pub mod use_cases;

pub use dto::CategoryOutput;
pub use use_cases::{
    CreateCategoryInput, CreateCategoryUseCase, DeleteCategoryInput, DeleteCategoryUseCase,
    GetCategoryInput, GetCategoryUseCase, ListCategoriesUseCase, UpdateCategoryInput,
    UpdateCategoryUseCase,
};
