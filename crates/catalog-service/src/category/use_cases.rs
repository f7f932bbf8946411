//! Category CRUD and list use cases.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use catalog_core::error::AppError;
use catalog_core::traits::{Entity, Repository, SearchableRepository, UseCase};
use catalog_core::types::params::SearchParams;
use catalog_entity::category::{Category, CategoryId, CategoryRepository, NewCategory};

use crate::pagination::{PaginationOutput, SearchInput};
use crate::shared::SharedRepository;

use super::dto::CategoryOutput;

macro_rules! category_use_case {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<R> {
            /// Category repository.
            repo: SharedRepository<R>,
        }

        impl<R> $name<R> {
            /// Creates the use case over a shared repository.
            pub fn new(repo: SharedRepository<R>) -> Self {
                Self { repo }
            }
        }

        impl<R> Clone for $name<R> {
            fn clone(&self) -> Self {
                Self {
                    repo: std::sync::Arc::clone(&self.repo),
                }
            }
        }
    };
}

category_use_case!(
    /// Creates and stores a new category.
    CreateCategoryUseCase
);
category_use_case!(
    /// Fetches a category by ID.
    GetCategoryUseCase
);
category_use_case!(
    /// Searches categories and returns one page.
    ListCategoriesUseCase
);
category_use_case!(
    /// Renames, re-describes, and (de)activates a category.
    UpdateCategoryUseCase
);
category_use_case!(
    /// Removes a category.
    DeleteCategoryUseCase
);

/// Input for [`CreateCategoryUseCase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    /// Name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Active flag; defaults to active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Input for [`GetCategoryUseCase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCategoryInput {
    /// Category ID as text.
    pub id: String,
}

/// Input for [`UpdateCategoryUseCase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryInput {
    /// Category ID as text.
    pub id: String,
    /// New name.
    pub name: String,
    /// New description; `None` clears it.
    #[serde(default)]
    pub description: Option<String>,
    /// `Some(true)` activates, `Some(false)` deactivates, `None` leaves as is.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Input for [`DeleteCategoryUseCase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCategoryInput {
    /// Category ID as text.
    pub id: String,
}

fn parse_id(id: &str) -> Result<CategoryId, AppError> {
    Ok(id.parse::<CategoryId>()?)
}

#[async_trait]
impl<R> UseCase for CreateCategoryUseCase<R>
where
    R: CategoryRepository + 'static,
{
    type Input = CreateCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: CreateCategoryInput) -> Result<CategoryOutput, AppError> {
        let category = Category::new(NewCategory {
            name: input.name,
            description: input.description,
            is_active: input.is_active,
            ..NewCategory::default()
        })?;

        self.repo.write().await.insert(category.clone())?;

        info!(category_id = %category.id(), name = %category.name(), "Category created");
        Ok(CategoryOutput::from(category))
    }
}

#[async_trait]
impl<R> UseCase for GetCategoryUseCase<R>
where
    R: CategoryRepository + 'static,
{
    type Input = GetCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: GetCategoryInput) -> Result<CategoryOutput, AppError> {
        let id = parse_id(&input.id)?;
        let category = self.repo.read().await.find_by_id(&id)?;
        Ok(CategoryOutput::from(category))
    }
}

#[async_trait]
impl<R> UseCase for ListCategoriesUseCase<R>
where
    R: CategoryRepository + 'static,
{
    type Input = SearchInput;
    type Output = PaginationOutput<CategoryOutput>;

    async fn execute(
        &self,
        input: SearchInput,
    ) -> Result<PaginationOutput<CategoryOutput>, AppError> {
        let params = SearchParams::<String>::from_raw(input);
        let result = self.repo.read().await.search(&params)?;
        Ok(PaginationOutput::from_result(result, CategoryOutput::from))
    }
}

#[async_trait]
impl<R> UseCase for UpdateCategoryUseCase<R>
where
    R: CategoryRepository + 'static,
{
    type Input = UpdateCategoryInput;
    type Output = CategoryOutput;

    async fn execute(&self, input: UpdateCategoryInput) -> Result<CategoryOutput, AppError> {
        let id = parse_id(&input.id)?;
        let mut repo = self.repo.write().await;

        let mut category = repo.find_by_id(&id)?.update(input.name, input.description)?;
        category = match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => category,
        };
        repo.update(category.clone())?;

        info!(category_id = %id, is_active = category.is_active(), "Category updated");
        Ok(CategoryOutput::from(category))
    }
}

#[async_trait]
impl<R> UseCase for DeleteCategoryUseCase<R>
where
    R: CategoryRepository + 'static,
{
    type Input = DeleteCategoryInput;
    type Output = ();

    async fn execute(&self, input: DeleteCategoryInput) -> Result<(), AppError> {
        let id = parse_id(&input.id)?;
        self.repo.write().await.delete(&id)?;

        info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
