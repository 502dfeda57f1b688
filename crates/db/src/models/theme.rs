//! Show theme model and DTO.

use planetarium_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `show_themes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ShowTheme {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a show theme.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShowTheme {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
