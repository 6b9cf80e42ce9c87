pub mod admin;
pub mod auth;
pub mod categories;
pub mod health;
pub mod items;
pub mod reports;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/logout                       logout
/// /auth/me                           own profile
///
/// /filter-options                    category + year dropdown values
///
/// /categories                        list, create
/// /categories/{id}                   get, update, delete (cascades to items)
///
/// /items                             filter (?q=&category=&year=&status=), add
/// /items/next-uid                    UID the next add would receive
/// /items/trash                       list trashed items
/// /items/{uid}                       get, update, delete (permanent)
/// /items/{uid}/write-off             mark written off (POST)
/// /items/{uid}/trash                 move to trash (POST)
/// /items/{uid}/restore               restore from trash (POST)
///
/// /admin/users                       list, create (admin only)
/// /admin/users/{id}                  get, update, delete (admin only)
///
/// /reports/summary                   plain-text report
/// /reports/stats                     distributions with fractions
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/filter-options", get(handlers::categories::filter_options))
        .nest("/categories", categories::router())
        .nest("/items", items::router())
        .nest("/admin", admin::router())
        .nest("/reports", reports::router())
}
