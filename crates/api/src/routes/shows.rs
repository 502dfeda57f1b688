//! Route definitions for the `/shows` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::shows;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET                 /             -> list
/// POST                /             -> create (staff)
/// GET                 /{id}         -> get_by_id
/// POST                /{id}/image   -> upload_image (staff)
/// PUT, PATCH, DELETE  / and /{id}   -> reject_write (405)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(shows::list)
                .post(shows::create)
                .put(shows::reject_write)
                .patch(shows::reject_write)
                .delete(shows::reject_write),
        )
        .route(
            "/{id}",
            get(shows::get_by_id)
                .put(shows::reject_write)
                .patch(shows::reject_write)
                .delete(shows::reject_write),
        )
        .route("/{id}/image", post(shows::upload_image))
}
