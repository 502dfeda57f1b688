//! Query-string filters for the list endpoints.
//!
//! The HTTP layer hands over the raw query values; parsing and the
//! empty-vs-absent rules live here so the repositories only ever see typed
//! filters.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a comma-separated id list such as `"1, 2,3"`.
///
/// Whitespace around each segment is ignored and empty segments are skipped,
/// so `"1,,2, "` yields `[1, 2]`. Duplicates are dropped, keeping the first
/// occurrence.
pub fn parse_id_list(param: &str, raw: &str) -> Result<Vec<DbId>, CoreError> {
    let mut ids = Vec::new();
    for segment in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let id = parse_id(param, segment)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Parse a single integer id from a query parameter.
pub fn parse_id(param: &str, raw: &str) -> Result<DbId, CoreError> {
    raw.trim().parse::<DbId>().map_err(|_| {
        CoreError::Validation(format!(
            "'{param}' expects integer ids, got '{}'",
            raw.trim()
        ))
    })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(param: &str, raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        CoreError::Validation(format!(
            "'{param}' expects a date formatted as YYYY-MM-DD, got '{}'",
            raw.trim()
        ))
    })
}

/// Parse an optional id-list parameter. Absent, blank and comma-only values
/// all mean "no filter".
fn optional_id_list(param: &str, raw: Option<&str>) -> Result<Option<Vec<DbId>>, CoreError> {
    match raw {
        Some(raw) => {
            let ids = parse_id_list(param, raw)?;
            Ok((!ids.is_empty()).then_some(ids))
        }
        None => Ok(None),
    }
}

/// Filter applied to `GET /shows`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowFilter {
    /// Keep shows linked to at least one of these themes.
    pub theme_ids: Option<Vec<DbId>>,
    /// Keep shows whose id is in this list.
    ///
    /// Populated from the `titles` query parameter, which has always been
    /// matched against show ids rather than title text.
    pub show_ids: Option<Vec<DbId>>,
}

impl ShowFilter {
    /// Build the filter from the raw `show_themes` and `titles` parameters.
    pub fn from_params(show_themes: Option<&str>, titles: Option<&str>) -> Result<Self, CoreError> {
        Ok(Self {
            theme_ids: optional_id_list("show_themes", show_themes)?,
            show_ids: optional_id_list("titles", titles)?,
        })
    }
}

/// Filter applied to `GET /sessions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFilter {
    /// Keep sessions whose `show_time` falls on this UTC day.
    pub date: Option<NaiveDate>,
    /// Keep sessions of this show.
    pub show_id: Option<DbId>,
}

impl SessionFilter {
    /// Build the filter from the raw `date` and `astronomy_show` parameters.
    pub fn from_params(date: Option<&str>, astronomy_show: Option<&str>) -> Result<Self, CoreError> {
        let date = date
            .filter(|d| !d.trim().is_empty())
            .map(|d| parse_date("date", d))
            .transpose()?;
        let show_id = astronomy_show
            .filter(|s| !s.trim().is_empty())
            .map(|s| parse_id("astronomy_show", s))
            .transpose()?;
        Ok(Self { date, show_id })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn id_list_tolerates_whitespace() {
        assert_eq!(parse_id_list("show_themes", "1, 2").unwrap(), vec![1, 2]);
        assert_eq!(parse_id_list("show_themes", " 3 ,4 ").unwrap(), vec![3, 4]);
    }

    #[test]
    fn id_list_skips_empty_segments_and_duplicates() {
        assert_eq!(parse_id_list("titles", "1,,2, ,1").unwrap(), vec![1, 2]);
    }

    #[test]
    fn id_list_rejects_non_integers() {
        assert_matches!(
            parse_id_list("show_themes", "1, moon"),
            Err(CoreError::Validation(msg)) if msg.contains("show_themes") && msg.contains("moon")
        );
    }

    #[test]
    fn show_filter_treats_blank_params_as_absent() {
        let filter = ShowFilter::from_params(Some("  "), Some(",")).unwrap();
        assert_eq!(filter, ShowFilter::default());
    }

    #[test]
    fn show_filter_parses_both_params() {
        let filter = ShowFilter::from_params(Some("1, 2"), Some("7")).unwrap();
        assert_eq!(filter.theme_ids, Some(vec![1, 2]));
        assert_eq!(filter.show_ids, Some(vec![7]));
    }

    #[test]
    fn session_filter_parses_date_and_show() {
        let filter = SessionFilter::from_params(Some("2022-06-02"), Some(" 5 ")).unwrap();
        assert_eq!(filter.date, NaiveDate::from_ymd_opt(2022, 6, 2));
        assert_eq!(filter.show_id, Some(5));
    }

    #[test]
    fn session_filter_rejects_bad_date() {
        assert_matches!(
            SessionFilter::from_params(Some("02.06.2022"), None),
            Err(CoreError::Validation(_))
        );
    }
}
