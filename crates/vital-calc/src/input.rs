//! Parsing of date values as they arrive from record forms.
//!
//! Date pickers yield `YYYY-MM-DD`; records loaded from the API carry full
//! timestamps (`2023-01-05T00:00:00`, sometimes with an offset). Every shape
//! resolves to a naive date-time so the age calculator can see sub-day
//! differences when a time is present.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, VitalError};

/// Naive date-time layouts tried in order after the plain date.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a form date value.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM[:SS[.fff]]`, the same
/// with a space instead of `T`, and RFC 3339. An offset is dropped, not
/// applied: the wall-clock date and time are kept as written.
///
/// # Errors
///
/// Returns [`VitalError::InvalidDate`] if the value is empty or matches none
/// of the accepted layouts.
///
/// # Examples
///
/// ```
/// use vital_calc::parse_form_date;
///
/// let dt = parse_form_date("2024-01-01").unwrap();
/// assert_eq!(dt.to_string(), "2024-01-01 00:00:00");
/// ```
pub fn parse_form_date(input: &str) -> Result<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() {
        return Err(VitalError::InvalidDate("empty date".to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()));
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Ok(dt);
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .map_err(|e| VitalError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Parse a form date value, treating anything unusable as absent.
pub fn parse_optional_form_date(input: &str) -> Option<NaiveDateTime> {
    parse_form_date(input).ok()
}
