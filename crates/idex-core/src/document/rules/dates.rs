//! Date normalization for identity documents.

use chrono::NaiveDate;

use super::FieldNormalizer;
use super::patterns::{DATE_CANONICAL, YEAR_ONLY};

/// Canonical date format: `DD/MM/YYYY`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Date normalizer accepting `DD/MM/YYYY` or a bare year.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer;

impl FieldNormalizer for DateNormalizer {
    fn normalize(&self, candidate: &str) -> Option<String> {
        normalize_date(candidate)
    }
}

/// Keep only digits and slashes, then accept a real `DD/MM/YYYY` date or a
/// four digit year. Anything else is rejected rather than guessed at.
///
/// Dates are checked against the calendar, so a well-shaped but impossible
/// value such as `31/02/1990` is rejected too.
pub fn normalize_date(candidate: &str) -> Option<String> {
    let cleaned: String = candidate
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '/')
        .collect();

    if DATE_CANONICAL.is_match(&cleaned) {
        parse_date(&cleaned).map(|_| cleaned)
    } else if YEAR_ONLY.is_match(&cleaned) {
        Some(cleaned)
    } else {
        None
    }
}

/// Parse a canonical `DD/MM/YYYY` value.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_date_is_idempotent() {
        for date in ["01/02/1990", "31/12/2030", "29/02/2000"] {
            let once = normalize_date(date).unwrap();
            assert_eq!(once, date);
            assert_eq!(normalize_date(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_strips_labels_and_noise() {
        assert_eq!(normalize_date("DOB: 01/02/1990"), Some("01/02/1990".to_string()));
        assert_eq!(normalize_date(" 15/08/1985."), Some("15/08/1985".to_string()));
    }

    #[test]
    fn test_year_only() {
        assert_eq!(normalize_date("Year of Birth : 1987"), Some("1987".to_string()));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(normalize_date("1/2/1990"), None);
        assert_eq!(normalize_date("01-02-1990"), None);
        assert_eq!(normalize_date("01/02/90"), None);
        assert_eq!(normalize_date("Date of Birth"), None);
        assert_eq!(normalize_date("01/02/1990 05/06/2015"), None);
    }

    #[test]
    fn test_rejects_impossible_calendar_dates() {
        assert_eq!(normalize_date("31/02/1990"), None);
        assert_eq!(normalize_date("00/13/1990"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("01/02/1990"),
            NaiveDate::from_ymd_opt(1990, 2, 1)
        );
    }
}
