//! Handlers for the `/admin/users` resource.
//!
//! The catalog rejects non-admin sessions with 403.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inventory_core::types::DbId;
use inventory_db::models::user::{CreateUser, UpdateUser, UserResponse};

use crate::error::AppResult;
use crate::middleware::auth::AuthSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = state.catalog.list_users(&auth.session).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let user = state.catalog.add_user(&auth.session, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = state.catalog.get_user(&auth.session, id).await?;
    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/admin/users/{id}
///
/// Open sessions of the edited user are revoked, the caller's own included,
/// so a role or name change takes effect on the next login.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = state.catalog.update_user(&auth.session, id, &input).await?;
    let revoked = state.sessions.revoke_user(id).await;
    tracing::debug!(target_user_id = id, revoked, "Revoked sessions of edited user");
    Ok(Json(DataResponse { data: user }))
}

/// DELETE /api/v1/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_user(&auth.session, id).await?;
    let revoked = state.sessions.revoke_user(id).await;
    tracing::debug!(target_user_id = id, revoked, "Revoked sessions of deleted user");
    Ok(StatusCode::NO_CONTENT)
}
