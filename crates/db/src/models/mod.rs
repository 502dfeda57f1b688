//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Serialize` response shapes where the API exposes a different view
//! - A `Deserialize` create DTO for inserts

pub mod dome;
pub mod show;
pub mod show_session;
pub mod theme;
pub mod user;
pub mod user_session;
