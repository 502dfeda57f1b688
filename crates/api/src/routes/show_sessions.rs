//! Route definitions for the `/sessions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::show_sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET  /      -> list
/// POST /      -> create (staff)
/// GET  /{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_sessions::list).post(show_sessions::create))
        .route("/{id}", get(show_sessions::get_by_id))
}
