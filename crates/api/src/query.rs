//! Query parameter types for list endpoints.
//!
//! Values arrive as raw strings and are parsed by the filter types in
//! `planetarium_core::filters`, so malformed ids produce a JSON validation
//! error instead of a bare extractor rejection.

use serde::Deserialize;

/// `GET /shows?show_themes=1,2&titles=3,4`
#[derive(Debug, Default, Deserialize)]
pub struct ShowListParams {
    /// Comma-separated theme ids.
    pub show_themes: Option<String>,
    /// Comma-separated show ids.
    pub titles: Option<String>,
}

/// `GET /sessions?date=2022-06-02&astronomy_show=1`
#[derive(Debug, Default, Deserialize)]
pub struct SessionListParams {
    pub date: Option<String>,
    pub astronomy_show: Option<String>,
}
