//! Handlers for the `/sessions` resource.
//!
//! Every list item carries the show's image as `astronomy_show_image`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use planetarium_core::error::CoreError;
use planetarium_core::filters::SessionFilter;
use planetarium_core::types::DbId;
use planetarium_db::models::show_session::{
    CreateShowSession, ShowSessionDetail, ShowSessionListItem,
};
use planetarium_db::repositories::{DomeRepo, ShowRepo, ShowSessionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::query::SessionListParams;
use crate::state::AppState;

/// GET /api/v1/sessions
///
/// List sessions, optionally filtered by `date` and `astronomy_show`.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<SessionListParams>,
) -> AppResult<Json<Vec<ShowSessionListItem>>> {
    let filter =
        SessionFilter::from_params(params.date.as_deref(), params.astronomy_show.as_deref())?;
    let sessions = ShowSessionRepo::list(&state.pool, &filter).await?;
    Ok(Json(sessions))
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShowSessionDetail>> {
    let session = ShowSessionRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShowSession",
            id,
        }))?;
    Ok(Json(session))
}

/// POST /api/v1/sessions
///
/// Schedule a session. The show and dome must already exist.
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateShowSession>,
) -> AppResult<(StatusCode, Json<ShowSessionDetail>)> {
    if ShowRepo::find_by_id(&state.pool, input.astronomy_show_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AstronomyShow",
            id: input.astronomy_show_id,
        }));
    }
    if DomeRepo::find_by_id(&state.pool, input.planetarium_dome_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PlanetariumDome",
            id: input.planetarium_dome_id,
        }));
    }

    let session = ShowSessionRepo::create(&state.pool, &input).await?;
    let detail = ShowSessionRepo::find_detail(&state.pool, session.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    tracing::info!(
        session_id = session.id,
        show_id = session.astronomy_show_id,
        dome_id = session.planetarium_dome_id,
        show_time = %session.show_time,
        user_id = staff.user_id,
        "Show session created",
    );

    Ok((StatusCode::CREATED, Json(detail)))
}
