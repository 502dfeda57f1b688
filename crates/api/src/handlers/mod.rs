pub mod domes;
pub mod show_sessions;
pub mod shows;
pub mod themes;
pub mod user;
