//! Route definitions for the `/user` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// POST /register       -> register
/// POST /token          -> login
/// POST /token/refresh  -> refresh
/// POST /logout         -> logout (requires auth)
/// GET  /me             -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(user::register))
        .route("/token", post(user::login))
        .route("/token/refresh", post(user::refresh))
        .route("/logout", post(user::logout))
        .route("/me", get(user::me))
}
