use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::shared::datetime::{Instant, days_in_month};

/// Canonical string layout of a bucket key.
pub const KEY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// String key shared by every bucket of a Total request.
pub const TOTAL_KEY: &str = "total";

/// Unit of time partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hour,
    Day,
    Week,
    Month,
    Year,
    Total,
}

impl Granularity {
    /// Resolve a request name. Accepts the long and the short synonym of each
    /// unit, case-insensitively; anything else is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let table: [(&str, &str, Granularity); 6] = [
            ("hour", "hourly", Granularity::Hour),
            ("day", "daily", Granularity::Day),
            ("week", "weekly", Granularity::Week),
            ("month", "monthly", Granularity::Month),
            ("year", "yearly", Granularity::Year),
            ("total", "total-month", Granularity::Total),
        ];
        table
            .iter()
            .find(|(short, long, _)| {
                name.eq_ignore_ascii_case(short) || name.eq_ignore_ascii_case(long)
            })
            .map(|(_, _, g)| *g)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
            Granularity::Total => "total",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anchor identifying the logical period a bucket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum BucketKey {
    At(Instant),
    Total,
}

impl BucketKey {
    pub fn instant(&self) -> Option<Instant> {
        match self {
            BucketKey::At(instant) => Some(*instant),
            BucketKey::Total => None,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::At(instant) => write!(f, "{}", instant.format(KEY_FORMAT)),
            BucketKey::Total => f.write_str(TOTAL_KEY),
        }
    }
}

impl From<BucketKey> for String {
    fn from(key: BucketKey) -> Self {
        key.to_string()
    }
}

/// Calendar month enclosing a bucket, whatever the bucket's own granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthBin {
    pub year: i32,
    pub month: u32,
}

impl MonthBin {
    pub fn of(instant: Instant) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    pub fn last_day(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// 1st of the month at 00:00:00.
    pub fn start(&self) -> Option<Instant> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).map(|d| d.and_time(NaiveTime::MIN))
    }

    /// Last day of the month at 23:59:59.
    pub fn end(&self) -> Option<Instant> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.last_day())
            .and_then(|d| d.and_hms_opt(23, 59, 59))
    }

    /// Two-digit year followed by two-digit month, e.g. `2403`.
    pub fn yymm(&self) -> String {
        format!("{:02}{:02}", self.year.rem_euclid(100), self.month)
    }

    /// Per-month storage suffix, e.g. `_2403`.
    pub fn suffix(&self) -> String {
        format!("_{}", self.yymm())
    }

    /// `YYYY-MM-01`.
    pub fn first_day(&self) -> String {
        format!("{:04}-{:02}-01", self.year, self.month)
    }
}

impl fmt::Display for MonthBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Inclusive range of day-of-month numbers covered by a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayRange {
    pub first: u32,
    pub last: u32,
}

impl DayRange {
    pub fn single(day: u32) -> Self {
        Self {
            first: day,
            last: day,
        }
    }

    pub fn between(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, day: u32) -> bool {
        (self.first..=self.last).contains(&day)
    }

    pub fn len(&self) -> usize {
        (self.first..=self.last).count()
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }
}

/// One calendar-aligned span of time produced by a splitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub granularity: Granularity,
    /// Inclusive.
    pub start: Instant,
    /// Inclusive.
    pub end: Instant,
    pub identity_key: BucketKey,
    pub month_bin: MonthBin,
    pub day_numbers: DayRange,
    /// True only when `[start, end]` is exactly the natural span of the granularity.
    pub is_full_unit: bool,
}

impl Bucket {
    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }

    pub fn key_string(&self) -> String {
        self.identity_key.to_string()
    }
}
