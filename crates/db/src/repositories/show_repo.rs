//! Repository for the `astronomy_shows` table and its theme join table.

use std::collections::HashMap;

use planetarium_core::filters::ShowFilter;
use planetarium_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::show::{AstronomyShow, CreateAstronomyShow, ShowDetail, ShowListItem};
use crate::models::theme::ShowTheme;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image, created_at, updated_at";

/// Provides data access for astronomy shows.
pub struct ShowRepo;

impl ShowRepo {
    /// List shows matching `filter`, ordered by id.
    ///
    /// `theme_ids` keeps shows linked to any of the given themes; `show_ids`
    /// keeps shows with one of the given ids. Both conditions are ANDed and a
    /// show appears at most once.
    pub async fn list(pool: &PgPool, filter: &ShowFilter) -> Result<Vec<ShowListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM astronomy_shows s \
             WHERE ($1::BIGINT[] IS NULL OR EXISTS ( \
                       SELECT 1 FROM astronomy_show_themes st \
                       WHERE st.astronomy_show_id = s.id AND st.show_theme_id = ANY($1))) \
               AND ($2::BIGINT[] IS NULL OR s.id = ANY($2)) \
             ORDER BY s.id"
        );
        let shows = sqlx::query_as::<_, AstronomyShow>(&query)
            .bind(filter.theme_ids.as_deref())
            .bind(filter.show_ids.as_deref())
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = shows.iter().map(|s| s.id).collect();
        let mut theme_ids = Self::theme_ids_by_show(pool, &ids).await?;

        Ok(shows
            .into_iter()
            .map(|show| {
                let themes = theme_ids.remove(&show.id).unwrap_or_default();
                ShowListItem::new(show, themes)
            })
            .collect())
    }

    /// Find a show row by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AstronomyShow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM astronomy_shows WHERE id = $1");
        sqlx::query_as::<_, AstronomyShow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a show in list shape.
    pub async fn find_list_item(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShowListItem>, sqlx::Error> {
        let Some(show) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let mut theme_ids = Self::theme_ids_by_show(pool, &[id]).await?;
        Ok(Some(ShowListItem::new(
            show,
            theme_ids.remove(&id).unwrap_or_default(),
        )))
    }

    /// Find a show in detail shape, with nested themes.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ShowDetail>, sqlx::Error> {
        let Some(show) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let themes = Self::themes_for_show(pool, id).await?;
        Ok(Some(ShowDetail::new(show, themes)))
    }

    /// Insert a show and link it to the referenced themes in one transaction.
    ///
    /// Theme ids without a matching `show_themes` row are skipped.
    pub async fn create(pool: &PgPool, dto: &CreateAstronomyShow) -> Result<ShowDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO astronomy_shows (title, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let show = sqlx::query_as::<_, AstronomyShow>(&query)
            .bind(&dto.title)
            .bind(dto.description.as_deref().unwrap_or_default())
            .fetch_one(&mut *tx)
            .await?;

        if !dto.show_themes.is_empty() {
            Self::link_themes(&mut *tx, show.id, &dto.show_themes).await?;
        }
        let themes = Self::themes_for_show(&mut *tx, show.id).await?;

        tx.commit().await?;
        Ok(ShowDetail::new(show, themes))
    }

    /// Link a show to existing themes. Unknown theme ids and links that
    /// already exist are ignored. Returns the number of new links.
    pub async fn link_themes<'e, E>(
        executor: E,
        show_id: DbId,
        theme_ids: &[DbId],
    ) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "INSERT INTO astronomy_show_themes (astronomy_show_id, show_theme_id) \
             SELECT $1, t.id FROM show_themes t WHERE t.id = ANY($2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(show_id)
        .bind(theme_ids)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Store a new image handle on a show, returning the updated row.
    pub async fn set_image(
        pool: &PgPool,
        id: DbId,
        handle: &str,
    ) -> Result<Option<AstronomyShow>, sqlx::Error> {
        let query = format!(
            "UPDATE astronomy_shows SET image = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AstronomyShow>(&query)
            .bind(id)
            .bind(handle)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Theme associations
    // -----------------------------------------------------------------------

    /// Full theme rows linked to a show, ordered by theme id.
    async fn themes_for_show<'e, E>(executor: E, show_id: DbId) -> Result<Vec<ShowTheme>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, ShowTheme>(
            "SELECT t.id, t.name FROM show_themes t \
             JOIN astronomy_show_themes st ON st.show_theme_id = t.id \
             WHERE st.astronomy_show_id = $1 \
             ORDER BY t.id",
        )
        .bind(show_id)
        .fetch_all(executor)
        .await
    }

    /// Theme ids per show for a batch of shows, each list ascending.
    async fn theme_ids_by_show(
        pool: &PgPool,
        show_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<DbId>>, sqlx::Error> {
        if show_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let links = sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT astronomy_show_id, show_theme_id FROM astronomy_show_themes \
             WHERE astronomy_show_id = ANY($1) \
             ORDER BY astronomy_show_id, show_theme_id",
        )
        .bind(show_ids)
        .fetch_all(pool)
        .await?;

        let mut by_show: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for (show_id, theme_id) in links {
            by_show.entry(show_id).or_default().push(theme_id);
        }
        Ok(by_show)
    }
}
