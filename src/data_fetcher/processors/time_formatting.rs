use crate::error::AppError;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Parses an event date into a UTC timestamp.
///
/// The API sends ISO 8601 timestamps, usually without seconds
/// (`2024-10-23T23:30Z`), sometimes full RFC 3339 (`2024-10-23T23:30:00Z`).
///
/// # Examples
///
/// ```rust
/// use team_schedule::data_fetcher::processors::parse_event_date;
///
/// let date = parse_event_date("2024-10-23T23:30Z").unwrap();
/// assert_eq!(date.to_rfc3339(), "2024-10-23T23:30:00+00:00");
/// ```
pub fn parse_event_date(date: &str) -> Result<DateTime<Utc>, AppError> {
    let trimmed = date.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(AppError::datetime_parse_error(format!(
        "Failed to parse event date '{date}'"
    )))
}

/// Formats a game timestamp in local time, e.g. "Wed Oct 23 19:30".
pub fn format_game_time(date: &DateTime<Utc>) -> String {
    format_game_time_in(date, &Local)
}

/// Formats a game timestamp in the given timezone. Deterministic helper for tests.
pub fn format_game_time_in<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(tz).format("%a %b %-d %H:%M").to_string()
}
