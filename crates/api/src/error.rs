use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventory_core::error::CoreError;
use inventory_db::error::CatalogError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error surfaced by the catalog.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Missing, malformed or revoked session token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Core(core) => AppError::Core(core),
            CatalogError::Storage(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error onto an HTTP status, error code and message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            err.to_string(),
        ),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::DuplicateName(_)
        | CoreError::DuplicateUsername(_)
        | CoreError::DuplicateUid(_) => (StatusCode::CONFLICT, "DUPLICATE", err.to_string()),
        CoreError::ConstraintViolation(msg) => {
            (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION", msg.clone())
        }
        CoreError::LastAdmin => (StatusCode::CONFLICT, "LAST_ADMIN", err.to_string()),
    }
}
