//! Astronomy show model, list/detail shapes and DTO.
//!
//! The list shape carries theme ids only; the detail shape nests the full
//! theme objects.

use planetarium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::theme::ShowTheme;

/// A row from the `astronomy_shows` table.
#[derive(Debug, Clone, FromRow)]
pub struct AstronomyShow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List representation: theme ids, no nested objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub show_themes: Vec<DbId>,
}

impl ShowListItem {
    pub fn new(show: AstronomyShow, show_themes: Vec<DbId>) -> Self {
        Self {
            id: show.id,
            title: show.title,
            description: show.description,
            image: show.image,
            show_themes,
        }
    }
}

/// Detail representation with fully nested themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowDetail {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub show_themes: Vec<ShowTheme>,
}

impl ShowDetail {
    pub fn new(show: AstronomyShow, show_themes: Vec<ShowTheme>) -> Self {
        Self {
            id: show.id,
            title: show.title,
            description: show.description,
            image: show.image,
            show_themes,
        }
    }
}

/// DTO for creating a show.
///
/// There is deliberately no `image` field: images are attached to existing
/// shows through the upload endpoint only.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAstronomyShow {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    /// Theme ids to link. Ids without a matching theme are ignored.
    #[serde(default)]
    pub show_themes: Vec<DbId>,
}
