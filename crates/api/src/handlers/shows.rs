//! Handlers for the `/shows` resource.
//!
//! Reads are open to any authenticated user, creation and image upload
//! require staff, and updates/deletes are rejected for everyone.

use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::Json;
use planetarium_core::catalog::require_non_blank;
use planetarium_core::error::CoreError;
use planetarium_core::filters::{parse_id_list, ShowFilter};
use planetarium_core::images::validate_image;
use planetarium_core::storage::show_image_key;
use planetarium_core::types::DbId;
use planetarium_db::models::show::{CreateAstronomyShow, ShowDetail, ShowListItem};
use planetarium_db::repositories::ShowRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::query::ShowListParams;
use crate::state::AppState;

/// Response body of a successful image upload.
#[derive(Debug, Serialize)]
pub struct ShowImageResponse {
    pub id: DbId,
    pub image: String,
}

/// GET /api/v1/shows
///
/// List shows, optionally filtered by `show_themes` and `titles`.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<ShowListParams>,
) -> AppResult<Json<Vec<ShowListItem>>> {
    let filter = ShowFilter::from_params(params.show_themes.as_deref(), params.titles.as_deref())?;
    let shows = ShowRepo::list(&state.pool, &filter).await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShowDetail>> {
    let show = ShowRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AstronomyShow",
            id,
        }))?;
    Ok(Json(show))
}

/// POST /api/v1/shows
///
/// Create a show from a JSON or multipart body. Any `image` sent here is
/// discarded; images are attached through `POST /shows/{id}/image`.
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    ShowPayload(mut input): ShowPayload,
) -> AppResult<(StatusCode, Json<ShowDetail>)> {
    input.title = require_non_blank("title", &input.title)?.to_string();
    input.validate()?;

    let show = ShowRepo::create(&state.pool, &input).await?;

    tracing::info!(
        show_id = show.id,
        title = %show.title,
        theme_count = show.show_themes.len(),
        user_id = staff.user_id,
        "Astronomy show created",
    );

    Ok((StatusCode::CREATED, Json(show)))
}

/// POST /api/v1/shows/{id}/image
///
/// Accepts a multipart form with a required `image` field. The payload must
/// decode as an image; on success it replaces the show's current image.
pub async fn upload_image(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<ShowImageResponse>> {
    let show = ShowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AstronomyShow",
            id,
        }))?;

    let mut image_data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("image") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image_data = Some(data);
        }
    }

    let data = image_data.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Missing required 'image' field".into()))
    })?;
    let validated = validate_image(&data)?;

    let key = show_image_key(&show.title, validated.extension());
    let handle = state.blob_store.put(&key, &data).await?;

    let updated = match ShowRepo::set_image(&state.pool, id, &handle).await {
        Ok(Some(updated)) => updated,
        outcome => {
            // The row vanished or the update failed; drop the orphaned blob.
            if let Err(e) = state.blob_store.delete(&handle).await {
                tracing::warn!(error = %e, image = %handle, "Failed to remove orphaned image");
            }
            return Err(match outcome {
                Err(e) => e.into(),
                _ => AppError::Core(CoreError::NotFound {
                    entity: "AstronomyShow",
                    id,
                }),
            });
        }
    };

    if let Some(previous) = show.image.as_deref() {
        if let Err(e) = state.blob_store.delete(previous).await {
            tracing::warn!(error = %e, image = %previous, "Failed to remove replaced image");
        }
    }

    tracing::info!(
        show_id = id,
        image = %handle,
        format = ?validated.format,
        width = validated.width,
        height = validated.height,
        user_id = staff.user_id,
        "Astronomy show image uploaded",
    );

    Ok(Json(ShowImageResponse {
        id: updated.id,
        image: handle,
    }))
}

/// PUT / PATCH / DELETE on `/api/v1/shows` and `/api/v1/shows/{id}`
///
/// Shows are never modified or removed through the API, whatever the
/// caller's role. Authentication still runs first so anonymous callers get 401.
pub async fn reject_write(RequireAuth(user): RequireAuth, method: Method) -> AppResult<()> {
    tracing::debug!(user_id = user.user_id, %method, "Rejected write to astronomy show");
    Err(AppError::Core(CoreError::MethodNotAllowed(format!(
        "Method \"{method}\" not allowed."
    ))))
}

// ---------------------------------------------------------------------------
// Create payload
// ---------------------------------------------------------------------------

/// Body of `POST /shows`, accepted as JSON or `multipart/form-data`.
///
/// Multipart `show_themes` may be repeated and each value may itself be a
/// comma-separated list. Unknown fields, including `image`, are ignored.
pub struct ShowPayload(pub CreateAstronomyShow);

impl FromRequest<AppState> for ShowPayload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return read_multipart_show(multipart).await.map(ShowPayload);
        }

        let Json(input) = Json::<CreateAstronomyShow>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(ShowPayload(input))
    }
}

async fn read_multipart_show(mut multipart: Multipart) -> AppResult<CreateAstronomyShow> {
    let mut input = CreateAstronomyShow::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" | "description" | "show_themes" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match name.as_str() {
                    "title" => input.title = text,
                    "description" => input.description = Some(text),
                    _ => input.show_themes.extend(parse_id_list("show_themes", &text)?),
                }
            }
            "image" => {
                let discarded = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                tracing::debug!(bytes = discarded.len(), "Ignoring image sent with show creation");
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(input)
}
