//! Catalog rules for shows, themes and domes.
//!
//! Length and range limits live on the request DTOs; this module holds the
//! rules that need more than a declarative attribute.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 5;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject values that are empty once surrounding whitespace is removed.
///
/// Returns the trimmed value so callers persist the normalized form.
pub fn require_non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!(
            "'{field}' must not be blank"
        )));
    }
    Ok(trimmed)
}

/// Normalize an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Domes
// ---------------------------------------------------------------------------

/// Seating capacity of a dome: `rows * seats_in_row`.
///
/// Computed in `i64` so large layouts cannot overflow the `INTEGER` columns.
pub fn dome_capacity(rows: i32, seats_in_row: i32) -> i64 {
    i64::from(rows) * i64::from(seats_in_row)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn capacity_is_rows_times_seats() {
        assert_eq!(dome_capacity(20, 20), 400);
        assert_eq!(dome_capacity(1, 7), 7);
    }

    #[test]
    fn capacity_does_not_overflow_i32() {
        assert_eq!(dome_capacity(i32::MAX, 2), i64::from(i32::MAX) * 2);
    }

    #[test]
    fn blank_values_are_rejected() {
        assert_matches!(require_non_blank("title", "   "), Err(CoreError::Validation(_)));
        assert_matches!(require_non_blank("title", ""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn non_blank_values_are_trimmed() {
        assert_eq!(require_non_blank("title", "  Moon  ").unwrap(), "Moon");
    }

    #[test]
    fn emails_are_lowercased_and_trimmed() {
        assert_eq!(normalize_email(" Admin@Planetarium.COM "), "admin@planetarium.com");
    }
}
