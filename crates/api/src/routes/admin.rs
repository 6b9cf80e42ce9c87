//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by the catalog).
///
/// ```text
/// GET    /users         -> list_users
/// POST   /users         -> create_user
/// GET    /users/{id}    -> get_user
/// PUT    /users/{id}    -> update_user
/// DELETE /users/{id}    -> delete_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
