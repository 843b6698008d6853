//! Calendar date helpers.
//!
//! Stays and rule windows are whole calendar days. Inputs coming from the
//! reservation form are either plain `YYYY-MM-DD` dates or full ISO date-times
//! (`2024-01-05T00:00:00.000Z`); the time of day is dropped.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 date-time.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pousada_pricing::dates::parse_calendar_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(parse_calendar_date("2024-01-05"), Some(expected));
/// assert_eq!(parse_calendar_date("2024-01-05T18:30:00.000Z"), Some(expected));
/// ```
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Serde adapter for [`parse_calendar_date`].
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date '{}', expected YYYY-MM-DD or an RFC 3339 date-time",
            raw
        ))
    })
}
