//! Route definitions for the `/themes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::themes;
use crate::state::AppState;

/// Routes mounted at `/themes`.
///
/// ```text
/// GET  /  -> list
/// POST /  -> create (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(themes::list).post(themes::create))
}
