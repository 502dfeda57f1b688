//! Handlers for the `/themes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use planetarium_core::catalog::require_non_blank;
use planetarium_db::models::theme::{CreateShowTheme, ShowTheme};
use planetarium_db::repositories::ThemeRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// GET /api/v1/themes
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ShowTheme>>> {
    let themes = ThemeRepo::list(&state.pool).await?;
    Ok(Json(themes))
}

/// POST /api/v1/themes
///
/// Create a theme. Duplicate names are rejected with 409.
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(mut input): Json<CreateShowTheme>,
) -> AppResult<(StatusCode, Json<ShowTheme>)> {
    input.name = require_non_blank("name", &input.name)?.to_string();
    input.validate()?;

    let theme = ThemeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        theme_id = theme.id,
        name = %theme.name,
        user_id = staff.user_id,
        "Show theme created",
    );

    Ok((StatusCode::CREATED, Json(theme)))
}
