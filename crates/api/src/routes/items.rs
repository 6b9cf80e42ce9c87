//! Route definitions for the `/items` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                  -> list (filtered)
/// POST   /                  -> create
/// GET    /next-uid          -> next_uid
/// GET    /trash             -> list_trashed
/// GET    /{uid}             -> get_by_uid
/// PUT    /{uid}             -> update
/// DELETE /{uid}             -> delete
/// POST   /{uid}/write-off   -> write_off
/// POST   /{uid}/trash       -> trash
/// POST   /{uid}/restore     -> restore
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list).post(items::create))
        .route("/next-uid", get(items::next_uid))
        .route("/trash", get(items::list_trashed))
        .route(
            "/{uid}",
            get(items::get_by_uid)
                .put(items::update)
                .delete(items::delete),
        )
        .route("/{uid}/write-off", post(items::write_off))
        .route("/{uid}/trash", post(items::trash))
        .route("/{uid}/restore", post(items::restore))
}
