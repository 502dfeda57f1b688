pub mod domes;
pub mod health;
pub mod show_sessions;
pub mod shows;
pub mod themes;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /shows                       list, create (staff); PUT/PATCH/DELETE -> 405
/// /shows/{id}                  detail; PUT/PATCH/DELETE -> 405
/// /shows/{id}/image            upload image (staff)
///
/// /themes                      list, create (staff)
/// /domes                       list, create (staff)
///
/// /sessions                    list (?date, ?astronomy_show), create (staff)
/// /sessions/{id}               detail
///
/// /user/register               register (public)
/// /user/token                  obtain tokens (public)
/// /user/token/refresh          rotate tokens (public)
/// /user/logout                 revoke sessions (requires auth)
/// /user/me                     current account (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Show catalog, including image upload.
        .nest("/shows", shows::router())
        .nest("/themes", themes::router())
        .nest("/domes", domes::router())
        .nest("/sessions", show_sessions::router())
        // Accounts and tokens.
        .nest("/user", user::router())
}
