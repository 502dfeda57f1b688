//! Repository for the `planetarium_domes` table.

use planetarium_core::types::DbId;
use sqlx::PgPool;

use crate::models::dome::{CreatePlanetariumDome, PlanetariumDome};

const COLUMNS: &str = "id, name, rows, seats_in_row";

/// Provides data access for planetarium domes.
pub struct DomeRepo;

impl DomeRepo {
    /// List all domes ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<PlanetariumDome>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planetarium_domes ORDER BY id");
        sqlx::query_as::<_, PlanetariumDome>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlanetariumDome>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planetarium_domes WHERE id = $1");
        sqlx::query_as::<_, PlanetariumDome>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreatePlanetariumDome,
    ) -> Result<PlanetariumDome, sqlx::Error> {
        let query = format!(
            "INSERT INTO planetarium_domes (name, rows, seats_in_row) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlanetariumDome>(&query)
            .bind(&dto.name)
            .bind(dto.rows)
            .bind(dto.seats_in_row)
            .fetch_one(pool)
            .await
    }
}
