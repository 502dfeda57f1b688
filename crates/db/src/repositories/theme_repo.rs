//! Repository for the `show_themes` table.

use planetarium_core::types::DbId;
use sqlx::PgPool;

use crate::models::theme::{CreateShowTheme, ShowTheme};

const COLUMNS: &str = "id, name";

/// Provides data access for show themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// List all themes ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowTheme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM show_themes ORDER BY id");
        sqlx::query_as::<_, ShowTheme>(&query).fetch_all(pool).await
    }

    /// Find a theme by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShowTheme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM show_themes WHERE id = $1");
        sqlx::query_as::<_, ShowTheme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a theme. Fails with a `uq_show_themes_name` violation on
    /// duplicate names.
    pub async fn create(pool: &PgPool, dto: &CreateShowTheme) -> Result<ShowTheme, sqlx::Error> {
        let query = format!("INSERT INTO show_themes (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, ShowTheme>(&query)
            .bind(&dto.name)
            .fetch_one(pool)
            .await
    }
}
