//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::Json;
use inventory_core::report::InventoryStats;

use crate::error::AppResult;
use crate::middleware::auth::AuthSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reports/summary
///
/// The plain-text inventory report. Storage failures are rendered into the
/// text rather than returned as an error status.
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Json<DataResponse<String>> {
    let text = state.catalog.build_report(&auth.session).await;
    Json(DataResponse { data: text })
}

/// GET /api/v1/reports/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<DataResponse<InventoryStats>>> {
    let stats = state.catalog.compute_stats(&auth.session).await?;
    Ok(Json(DataResponse { data: stats }))
}
