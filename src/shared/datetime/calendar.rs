use std::fmt::Write;

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};

use super::error::InputError;
use super::time::{Instant, TimeParser};

const SECS_PER_HOUR_END: i64 = 3_599;
const SECS_PER_DAY_END: i64 = 86_399;

/// Calendar capability the splitters and the aggregator are written against.
///
/// Implementors supply the five primitives; the relative expressions
/// ("end of day", "start of next month", "last Monday", ...) are derived from them.
pub trait Calendar {
    fn parse_datetime(&self, input: &str) -> Result<Instant, InputError>;

    /// Render `instant` with a strftime-style pattern.
    fn format_datetime(&self, instant: Instant, pattern: &str) -> String;

    /// ISO day of week, Monday = 1 .. Sunday = 7.
    fn day_of_week(&self, instant: Instant) -> u32;

    fn iso_week_number(&self, instant: Instant) -> u32;

    /// Number of the last day in the month containing `instant` (28..=31).
    fn last_day_of_month(&self, instant: Instant) -> u32;

    fn start_of_hour(&self, instant: Instant) -> Instant {
        let elapsed = i64::from(instant.minute() * 60 + instant.second());
        instant - Duration::seconds(elapsed)
    }

    /// `HH:59:59` of the hour containing `instant`.
    fn end_of_hour(&self, instant: Instant) -> Instant {
        self.start_of_hour(instant) + Duration::seconds(SECS_PER_HOUR_END)
    }

    fn start_of_day(&self, instant: Instant) -> Instant {
        instant.date().and_time(NaiveTime::MIN)
    }

    /// `23:59:59` of the day containing `instant`.
    fn end_of_day(&self, instant: Instant) -> Instant {
        self.start_of_day(instant) + Duration::seconds(SECS_PER_DAY_END)
    }

    /// Monday 00:00:00 of the week containing `instant`: itself when already
    /// a Monday, otherwise the previous Monday.
    fn start_of_week(&self, instant: Instant) -> Instant {
        let back = i64::from(self.day_of_week(instant) - 1);
        self.start_of_day(instant)
            .checked_sub_signed(Duration::days(back))
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// Sunday 23:59:59 of the week containing `instant`: its own day end when
    /// already a Sunday, otherwise the next Sunday.
    fn end_of_week(&self, instant: Instant) -> Instant {
        let ahead = i64::from(7 - self.day_of_week(instant));
        self.end_of_day(instant)
            .checked_add_signed(Duration::days(ahead))
            .unwrap_or(NaiveDateTime::MAX)
    }

    fn start_of_month(&self, instant: Instant) -> Instant {
        let back = i64::from(instant.day() - 1);
        self.start_of_day(instant) - Duration::days(back)
    }

    /// `23:59:59` on the last day of the month containing `instant`.
    fn end_of_month(&self, instant: Instant) -> Instant {
        let ahead = i64::from(self.last_day_of_month(instant) - instant.day());
        self.end_of_day(instant) + Duration::days(ahead)
    }

    fn start_of_year(&self, instant: Instant) -> Instant {
        let back = i64::from(instant.ordinal0());
        self.start_of_day(instant) - Duration::days(back)
    }
}

/// Proleptic Gregorian calendar backed by chrono.
#[derive(Debug, Default, Clone, Copy)]
pub struct GregorianCalendar;

impl Calendar for GregorianCalendar {
    fn parse_datetime(&self, input: &str) -> Result<Instant, InputError> {
        TimeParser::parse_str(input)
    }

    fn format_datetime(&self, instant: Instant, pattern: &str) -> String {
        let mut out = String::new();
        // chrono reports unknown specifiers as a fmt error
        if write!(out, "{}", instant.format(pattern)).is_err() {
            out.clear();
        }
        out
    }

    fn day_of_week(&self, instant: Instant) -> u32 {
        instant.weekday().number_from_monday()
    }

    fn iso_week_number(&self, instant: Instant) -> u32 {
        instant.iso_week().week()
    }

    fn last_day_of_month(&self, instant: Instant) -> u32 {
        days_in_month(instant.year(), instant.month())
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}
