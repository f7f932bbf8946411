//! Category CRUD and list handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use catalog_core::traits::UseCase;
use catalog_service::category::{CategoryOutput, DeleteCategoryInput, GetCategoryInput};
use catalog_service::PaginationOutput;

use crate::dto::request::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{JsonBody, SearchQuery};
use crate::state::AppState;

/// GET /api/categories?page=&per_page=&sort=&sort_dir=&filter=
pub async fn list_categories(
    State(state): State<AppState>,
    query: SearchQuery,
) -> Result<Json<ApiResponse<PaginationOutput<CategoryOutput>>>, ApiError> {
    let page = state.list_categories.execute(query.into_inner()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryOutput>>), ApiError> {
    let category = state.create_category.execute(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CategoryOutput>>, ApiError> {
    let category = state.get_category.execute(GetCategoryInput { id }).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<CategoryOutput>>, ApiError> {
    let category = state.update_category.execute(req.into_input(id)).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_category
        .execute(DeleteCategoryInput { id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
