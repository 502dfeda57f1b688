//! Route definitions for the `/domes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::domes;
use crate::state::AppState;

/// Routes mounted at `/domes`.
///
/// ```text
/// GET  /  -> list
/// POST /  -> create (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(domes::list).post(domes::create))
}
