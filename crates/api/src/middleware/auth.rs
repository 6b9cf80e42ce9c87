//! Bearer-token session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use inventory_core::access::Session;

use crate::error::AppError;
use crate::state::AppState;

/// The caller's session, resolved from `Authorization: Bearer <token>`.
///
/// Role checks happen inside the catalog; this extractor only proves the
/// caller logged in.
///
/// ```ignore
/// async fn my_handler(auth: AuthSession) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.session.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub session: Session,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".into())
        })?;

        let session = state
            .sessions
            .get(token)
            .await
            .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".into()))?;

        Ok(AuthSession {
            token: token.to_string(),
            session,
        })
    }
}
