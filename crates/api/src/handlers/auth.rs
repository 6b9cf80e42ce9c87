//! Handlers for the `/auth` resource (login, logout, own profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inventory_core::access::Session;
use inventory_db::models::user::UserResponse;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub secret: String,
}

/// Successful login: the bearer token plus the session it unlocks.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub session: Session,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let session = state
        .catalog
        .authenticate(&input.username, &input.secret)
        .await?;
    let token = state.sessions.open(session.clone()).await;
    Ok(Json(DataResponse {
        data: LoginResponse { token, session },
    }))
}

/// POST /api/v1/auth/logout
///
/// Discards the caller's session. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth: AuthSession) -> AppResult<StatusCode> {
    if let Some(session) = state.sessions.close(&auth.token).await {
        state.catalog.logout(session);
    }
    let open_sessions = state.sessions.open_count().await;
    tracing::debug!(open_sessions, "Session closed");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let profile = state.catalog.profile(&auth.session).await?;
    Ok(Json(DataResponse { data: profile }))
}
