//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dome_repo;
pub mod show_repo;
pub mod show_session_repo;
pub mod theme_repo;
pub mod user_repo;
pub mod user_session_repo;

pub use dome_repo::DomeRepo;
pub use show_repo::ShowRepo;
pub use show_session_repo::ShowSessionRepo;
pub use theme_repo::ThemeRepo;
pub use user_repo::UserRepo;
pub use user_session_repo::UserSessionRepo;
