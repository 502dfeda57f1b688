//! Handlers for the `/domes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use planetarium_core::catalog::require_non_blank;
use planetarium_db::models::dome::{CreatePlanetariumDome, PlanetariumDomeResponse};
use planetarium_db::repositories::DomeRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// GET /api/v1/domes
///
/// List all domes with their computed capacity.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PlanetariumDomeResponse>>> {
    let domes = DomeRepo::list(&state.pool).await?;
    Ok(Json(domes.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/domes
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(mut input): Json<CreatePlanetariumDome>,
) -> AppResult<(StatusCode, Json<PlanetariumDomeResponse>)> {
    input.name = require_non_blank("name", &input.name)?.to_string();
    input.validate()?;

    let dome: PlanetariumDomeResponse = DomeRepo::create(&state.pool, &input).await?.into();

    tracing::info!(
        dome_id = dome.id,
        name = %dome.name,
        capacity = dome.capacity,
        user_id = staff.user_id,
        "Planetarium dome created",
    );

    Ok((StatusCode::CREATED, Json(dome)))
}
