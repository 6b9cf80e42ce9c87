//! Handlers for the `/items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use inventory_core::filter::{ItemFilter, RawItemFilter};
use inventory_core::types::ItemUid;
use inventory_db::models::item::{CreateItem, Item, UpdateItem};

use crate::error::AppResult;
use crate::middleware::auth::AuthSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/items?q=&category=&year=&status=
///
/// Every parameter is optional; blank values and `All` match everything.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(raw): Query<RawItemFilter>,
) -> AppResult<Json<DataResponse<Vec<Item>>>> {
    let filter = ItemFilter::from_raw(&raw)?;
    let items = state.catalog.filter_items(&auth.session, &filter).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/items
pub async fn create(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<DataResponse<Item>>)> {
    let item = state.catalog.add_item(&auth.session, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/items/next-uid
pub async fn next_uid(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<DataResponse<ItemUid>>> {
    let uid = state.catalog.preview_next_uid(&auth.session).await?;
    Ok(Json(DataResponse { data: uid }))
}

/// GET /api/v1/items/{uid}
pub async fn get_by_uid(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(uid): Path<ItemUid>,
) -> AppResult<Json<DataResponse<Item>>> {
    let item = state.catalog.get_item(&auth.session, uid).await?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/items/{uid}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(uid): Path<ItemUid>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<DataResponse<Item>>> {
    let item = state.catalog.update_item(&auth.session, uid, &input).await?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/items/{uid}
///
/// Permanent. Answers 204 whether or not the item existed.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(uid): Path<ItemUid>,
) -> AppResult<StatusCode> {
    state.catalog.delete_item(&auth.session, uid).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/items/{uid}/write-off
pub async fn write_off(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(uid): Path<ItemUid>,
) -> AppResult<Json<DataResponse<Item>>> {
    let item = state.catalog.mark_written_off(&auth.session, uid).await?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/items/{uid}/trash
pub async fn trash(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(uid): Path<ItemUid>,
) -> AppResult<StatusCode> {
    state.catalog.soft_delete_item(&auth.session, uid).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/items/{uid}/restore
pub async fn restore(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(uid): Path<ItemUid>,
) -> AppResult<Json<DataResponse<Item>>> {
    let item = state.catalog.restore_item(&auth.session, uid).await?;
    Ok(Json(DataResponse { data: item }))
}

/// GET /api/v1/items/trash
pub async fn list_trashed(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<DataResponse<Vec<Item>>>> {
    let items = state.catalog.list_trashed_items(&auth.session).await?;
    Ok(Json(DataResponse { data: items }))
}
