//! Repository for the `show_sessions` table.

use planetarium_core::filters::SessionFilter;
use planetarium_core::types::DbId;
use sqlx::PgPool;

use crate::models::show_session::{
    CreateShowSession, ShowSession, ShowSessionDetail, ShowSessionListItem, ShowSessionRow,
};
use crate::repositories::{DomeRepo, ShowRepo};

const COLUMNS: &str = "id, show_time, astronomy_show_id, planetarium_dome_id, created_at, updated_at";

/// Session columns joined with show and dome, aliased to match [`ShowSessionRow`].
const JOINED_COLUMNS: &str = "\
    ss.id, ss.show_time, ss.astronomy_show_id, \
    s.title AS astronomy_show_title, s.image AS astronomy_show_image, \
    ss.planetarium_dome_id, d.name AS planetarium_dome_name, \
    d.rows AS planetarium_dome_rows, d.seats_in_row AS planetarium_dome_seats_in_row";

/// Provides data access for show sessions.
pub struct ShowSessionRepo;

impl ShowSessionRepo {
    /// List sessions matching `filter`, ordered by show time then id.
    pub async fn list(
        pool: &PgPool,
        filter: &SessionFilter,
    ) -> Result<Vec<ShowSessionListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM show_sessions ss \
             JOIN astronomy_shows s ON s.id = ss.astronomy_show_id \
             JOIN planetarium_domes d ON d.id = ss.planetarium_dome_id \
             WHERE ($1::DATE IS NULL OR (ss.show_time AT TIME ZONE 'UTC')::DATE = $1) \
               AND ($2::BIGINT IS NULL OR ss.astronomy_show_id = $2) \
             ORDER BY ss.show_time, ss.id"
        );
        let rows = sqlx::query_as::<_, ShowSessionRow>(&query)
            .bind(filter.date)
            .bind(filter.show_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ShowSessionListItem::from).collect())
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShowSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM show_sessions WHERE id = $1");
        sqlx::query_as::<_, ShowSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a session with its show (list shape) and dome nested.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShowSessionDetail>, sqlx::Error> {
        let Some(session) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        // Foreign keys guarantee both references resolve.
        let show = ShowRepo::find_list_item(pool, session.astronomy_show_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        let dome = DomeRepo::find_by_id(pool, session.planetarium_dome_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok(Some(ShowSessionDetail {
            id: session.id,
            show_time: session.show_time,
            astronomy_show: show,
            planetarium_dome: dome.into(),
        }))
    }

    pub async fn create(pool: &PgPool, dto: &CreateShowSession) -> Result<ShowSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO show_sessions (show_time, astronomy_show_id, planetarium_dome_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShowSession>(&query)
            .bind(dto.show_time)
            .bind(dto.astronomy_show_id)
            .bind(dto.planetarium_dome_id)
            .fetch_one(pool)
            .await
    }
}
