//! Show session model, list/detail shapes and DTO.

use planetarium_core::catalog::dome_capacity;
use planetarium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::dome::PlanetariumDomeResponse;
use crate::models::show::ShowListItem;

/// A row from the `show_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct ShowSession {
    pub id: DbId,
    pub show_time: Timestamp,
    pub astronomy_show_id: DbId,
    pub planetarium_dome_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Session row joined with its show and dome, as read by the list query.
#[derive(Debug, Clone, FromRow)]
pub struct ShowSessionRow {
    pub id: DbId,
    pub show_time: Timestamp,
    pub astronomy_show_id: DbId,
    pub astronomy_show_title: String,
    pub astronomy_show_image: Option<String>,
    pub planetarium_dome_id: DbId,
    pub planetarium_dome_name: String,
    pub planetarium_dome_rows: i32,
    pub planetarium_dome_seats_in_row: i32,
}

/// List representation. The show's image is exposed read-through as
/// `astronomy_show_image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSessionListItem {
    pub id: DbId,
    pub show_time: Timestamp,
    pub astronomy_show_id: DbId,
    pub astronomy_show_title: String,
    pub astronomy_show_image: Option<String>,
    pub planetarium_dome_id: DbId,
    pub planetarium_dome_name: String,
    pub planetarium_dome_capacity: i64,
}

impl From<ShowSessionRow> for ShowSessionListItem {
    fn from(row: ShowSessionRow) -> Self {
        Self {
            planetarium_dome_capacity: dome_capacity(
                row.planetarium_dome_rows,
                row.planetarium_dome_seats_in_row,
            ),
            id: row.id,
            show_time: row.show_time,
            astronomy_show_id: row.astronomy_show_id,
            astronomy_show_title: row.astronomy_show_title,
            astronomy_show_image: row.astronomy_show_image,
            planetarium_dome_id: row.planetarium_dome_id,
            planetarium_dome_name: row.planetarium_dome_name,
        }
    }
}

/// Detail representation with the show and dome nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSessionDetail {
    pub id: DbId,
    pub show_time: Timestamp,
    pub astronomy_show: ShowListItem,
    pub planetarium_dome: PlanetariumDomeResponse,
}

/// DTO for creating a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShowSession {
    pub show_time: Timestamp,
    pub astronomy_show_id: DbId,
    pub planetarium_dome_id: DbId,
}
