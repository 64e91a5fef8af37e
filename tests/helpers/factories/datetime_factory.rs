use chrono::{Datelike, NaiveDate, Weekday};

use crate::shared::datetime::Instant;

/// Factory for creating test instants with known dates
pub struct DateTimeFactory;

impl DateTimeFactory {
    /// Create an instant for a specific date/time
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Instant {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    /// Create an instant for the start of a day
    pub fn date(year: i32, month: u32, day: u32) -> Instant {
        Self::at(year, month, day, 0, 0, 0)
    }

    /// Create an instant for the last second of a day
    pub fn end_of_date(year: i32, month: u32, day: u32) -> Instant {
        Self::at(year, month, day, 23, 59, 59)
    }

    /// Create an instant at noon, asserting the expected weekday
    pub fn weekday(year: i32, month: u32, day: u32, weekday: Weekday) -> Instant {
        let dt = Self::at(year, month, day, 12, 0, 0);
        assert_eq!(dt.weekday(), weekday);
        dt
    }

    /// Calendar date for named-range resolution
    pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
