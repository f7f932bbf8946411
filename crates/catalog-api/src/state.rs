//! Application state shared across all handlers.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_database::CategoryInMemoryRepository;
use catalog_service::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase, ListCategoriesUseCase,
    SharedRepository, UpdateCategoryUseCase,
};

/// Category store backing the HTTP API.
pub type CategoryStore = CategoryInMemoryRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Create category
    pub create_category: Arc<CreateCategoryUseCase<CategoryStore>>,
    /// Get category
    pub get_category: Arc<GetCategoryUseCase<CategoryStore>>,
    /// List categories
    pub list_categories: Arc<ListCategoriesUseCase<CategoryStore>>,
    /// Update category
    pub update_category: Arc<UpdateCategoryUseCase<CategoryStore>>,
    /// Delete category
    pub delete_category: Arc<DeleteCategoryUseCase<CategoryStore>>,
}

impl AppState {
    /// Wire every use case to one shared category store.
    pub fn new(config: AppConfig, categories: SharedRepository<CategoryStore>) -> Self {
        Self {
            config: Arc::new(config),
            create_category: Arc::new(CreateCategoryUseCase::new(Arc::clone(&categories))),
            get_category: Arc::new(GetCategoryUseCase::new(Arc::clone(&categories))),
            list_categories: Arc::new(ListCategoriesUseCase::new(Arc::clone(&categories))),
            update_category: Arc::new(UpdateCategoryUseCase::new(Arc::clone(&categories))),
            delete_category: Arc::new(DeleteCategoryUseCase::new(categories)),
        }
    }
}
