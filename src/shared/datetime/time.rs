use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::error::InputError;

/// Wall-clock instant in the caller's implicit zone, whole seconds only.
pub type Instant = NaiveDateTime;

/// Formats tried in order before falling back to RFC3339, date-only and epoch seconds.
/// `%.f` accepts an optional fraction, which is dropped afterwards.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Utility for parsing and normalizing time inputs to [`Instant`]s.
pub struct TimeParser;

impl TimeParser {
    /// Parse a string representing a time instant.
    /// Supports `YYYY-MM-DD HH:MM:SS`, ISO-8601 with `T`, `YYYY-MM-DD HH:MM`,
    /// RFC3339 (wall clock of the given offset), date-only (midnight), compact `YYYYMMDD`
    /// and integer epochs in s/ms/µs/ns (UTC).
    pub fn parse_str(input: &str) -> Result<Instant, InputError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(InputError::Empty);
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(truncate_subsec(dt));
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(truncate_subsec(dt.naive_local()));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }
        if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            return Self::parse_compact_date(s)
                .ok_or_else(|| InputError::InvalidDateTime(s.to_string()));
        }
        // Fallback: numeric string
        if let Ok(num) = s.parse::<i128>() {
            return Self::normalize_integer_epoch(num)
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|dt| dt.naive_utc())
                .ok_or_else(|| InputError::OutOfRange(s.to_string()));
        }

        Err(InputError::InvalidDateTime(s.to_string()))
    }

    /// `YYYYMMDD` at midnight.
    fn parse_compact_date(s: &str) -> Option<Instant> {
        let year = s.get(0..4)?.parse().ok()?;
        let month = s.get(4..6)?.parse().ok()?;
        let day = s.get(6..8)?.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
    }

    /// Integer magnitudes normalized to seconds by digit count.
    /// - up to 11 digits: seconds
    /// - 12..=14: milliseconds
    /// - 15..=16: microseconds
    /// - 17..=19: nanoseconds
    fn normalize_integer_epoch(n: i128) -> Option<i64> {
        let secs = match num_digits_u128(n.unsigned_abs()) {
            0..=11 => n,
            12..=14 => n / 1_000,
            15..=16 => n / 1_000_000,
            17..=19 => n / 1_000_000_000,
            _ => return None,
        };
        i64::try_from(secs).ok()
    }
}

fn num_digits_u128(mut x: u128) -> u32 {
    if x == 0 {
        return 1;
    }
    let mut c = 0;
    while x > 0 {
        x /= 10;
        c += 1;
    }
    c
}

/// Drop any sub-second component.
pub fn truncate_subsec(dt: NaiveDateTime) -> Instant {
    dt.with_nanosecond(0).unwrap_or(dt)
}
