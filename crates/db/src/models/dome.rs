//! Planetarium dome model, response shape and DTO.

use planetarium_core::catalog::dome_capacity;
use planetarium_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `planetarium_domes` table.
#[derive(Debug, Clone, FromRow)]
pub struct PlanetariumDome {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

/// API representation of a dome, including its computed capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetariumDomeResponse {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i64,
}

impl From<PlanetariumDome> for PlanetariumDomeResponse {
    fn from(dome: PlanetariumDome) -> Self {
        Self {
            capacity: dome_capacity(dome.rows, dome.seats_in_row),
            id: dome.id,
            name: dome.name,
            rows: dome.rows,
            seats_in_row: dome.seats_in_row,
        }
    }
}

/// DTO for creating a dome.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlanetariumDome {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(range(min = 1))]
    pub rows: i32,
    #[validate(range(min = 1))]
    pub seats_in_row: i32,
}
