use std::fmt;

use chrono::{Datelike, Days, Duration, Months, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::shared::datetime::Instant;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First instant of `start` and last instant of `end`.
    pub fn bounds(&self) -> (Instant, Instant) {
        let start = self.start.and_time(NaiveTime::MIN);
        let end = self.end.and_time(NaiveTime::MIN) + Duration::seconds(86_399);
        (start, end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Relative ranges a report can be requested for, resolved against "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedRange {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    /// The `n` whole days before today.
    LastDays(u32),
    /// The `n` whole calendar months before the current one.
    LastMonths(u32),
    ThisYear,
    LastYear,
    /// Caller supplies the bounds.
    Custom,
}

impl NamedRange {
    pub fn from_name(name: &str) -> Option<Self> {
        use NamedRange::*;

        let range = match name.trim().to_ascii_lowercase().as_str() {
            "today" => Today,
            "yesterday" | "previous_day" => Yesterday,
            "this_week" | "current_week" => ThisWeek,
            "last_week" | "previous_week" => LastWeek,
            "this_month" | "current_month" => ThisMonth,
            "last_month" | "previous_month" => LastMonth,
            "last_7_days" | "last_seven_days" | "previous_7_days" | "previous_seven_days" => {
                LastDays(7)
            }
            "last_30_days" | "previous_30_days" => LastDays(30),
            "last_two_months" | "last_2_months" | "previous_two_months" | "previous_2_months" => {
                LastMonths(2)
            }
            "last_three_months" | "last_3_months" | "previous_three_months"
            | "previous_3_months" => LastMonths(3),
            "last_six_months" | "last_6_months" | "previous_six_months" | "previous_6_months" => {
                LastMonths(6)
            }
            "last_twelve_months" | "last_12_months" | "previous_twelve_months"
            | "previous_12_months" => LastMonths(12),
            "this_year" => ThisYear,
            "last_year" | "previous_year" => LastYear,
            "custom" => Custom,
            _ => return None,
        };
        Some(range)
    }

    /// Concrete days for this range as seen on `today`. `Custom` has none.
    pub fn resolve(&self, today: NaiveDate) -> Option<DateRange> {
        use NamedRange::*;

        let month_start = today.with_day(1)?;
        let range = match *self {
            Today => DateRange::new(today, today),
            Yesterday => {
                let day = today.pred_opt()?;
                DateRange::new(day, day)
            }
            ThisWeek => {
                let back = u64::from(today.weekday().num_days_from_monday());
                DateRange::new(today.checked_sub_days(Days::new(back))?, today)
            }
            LastWeek => {
                // most recent Sunday strictly before today
                let back = match today.weekday().number_from_monday() % 7 {
                    0 => 7,
                    n => n,
                };
                let end = today.checked_sub_days(Days::new(u64::from(back)))?;
                DateRange::new(end.checked_sub_days(Days::new(6))?, end)
            }
            ThisMonth => DateRange::new(month_start, today),
            LastMonth => {
                let end = month_start.pred_opt()?;
                DateRange::new(end.with_day(1)?, end)
            }
            LastDays(n) => DateRange::new(
                today.checked_sub_days(Days::new(u64::from(n)))?,
                today.pred_opt()?,
            ),
            LastMonths(n) => DateRange::new(
                month_start.checked_sub_months(Months::new(n))?,
                month_start.pred_opt()?,
            ),
            ThisYear => DateRange::new(today.with_ordinal(1)?, today),
            LastYear => {
                let year = today.year() - 1;
                DateRange::new(
                    NaiveDate::from_ymd_opt(year, 1, 1)?,
                    NaiveDate::from_ymd_opt(year, 12, 31)?,
                )
            }
            Custom => return None,
        };
        Some(range)
    }
}
