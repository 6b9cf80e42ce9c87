//! Handlers for the `/categories` resource and filter options.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inventory_core::types::DbId;
use inventory_db::catalog::FilterOptions;
use inventory_db::models::category::{Category, CreateCategory, UpdateCategory};

use crate::error::AppResult;
use crate::middleware::auth::AuthSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = state.catalog.list_categories(&auth.session).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    let category = state.catalog.add_category(&auth.session, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = state.catalog.get_category(&auth.session, id).await?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = state
        .catalog
        .update_category(&auth.session, id, &input)
        .await?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Removes the category and every item in it.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_category(&auth.session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/filter-options
pub async fn filter_options(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<DataResponse<FilterOptions>>> {
    let options = state.catalog.filter_options(&auth.session).await?;
    Ok(Json(DataResponse { data: options }))
}
