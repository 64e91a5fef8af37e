use crate::interval::types::{Granularity, MonthBin};
use crate::shared::datetime::{Calendar, Instant};

/// Boundary computation for one calendar granularity.
///
/// The cursor loop in [`split_range`](super::split_range) is shared; a strategy only
/// decides where the unit containing the cursor naturally starts and ends.
pub trait BoundaryStrategy {
    fn granularity(&self) -> Granularity;

    /// Natural `[start, end]` of the unit containing `instant`. The start doubles
    /// as the bucket's identity key.
    fn natural_span(&self, cal: &dyn Calendar, instant: Instant) -> (Instant, Instant);

    /// Last instant a bucket opened at `cursor` may reach before the overall range clip.
    fn unit_end(&self, cal: &dyn Calendar, cursor: Instant) -> Instant {
        self.natural_span(cal, cursor).1
    }

    fn marks_full_units(&self) -> bool {
        true
    }
}

pub struct HourlyStrategy;

impl BoundaryStrategy for HourlyStrategy {
    fn granularity(&self) -> Granularity {
        Granularity::Hour
    }

    fn natural_span(&self, cal: &dyn Calendar, instant: Instant) -> (Instant, Instant) {
        (cal.start_of_hour(instant), cal.end_of_hour(instant))
    }
}

pub struct DailyStrategy;

impl BoundaryStrategy for DailyStrategy {
    fn granularity(&self) -> Granularity {
        Granularity::Day
    }

    fn natural_span(&self, cal: &dyn Calendar, instant: Instant) -> (Instant, Instant) {
        (cal.start_of_day(instant), cal.end_of_day(instant))
    }
}

/// Monday..Sunday weeks, additionally cut at every month boundary.
pub struct WeeklyStrategy;

impl BoundaryStrategy for WeeklyStrategy {
    fn granularity(&self) -> Granularity {
        Granularity::Week
    }

    fn natural_span(&self, cal: &dyn Calendar, instant: Instant) -> (Instant, Instant) {
        (cal.start_of_week(instant), cal.end_of_week(instant))
    }

    fn unit_end(&self, cal: &dyn Calendar, cursor: Instant) -> Instant {
        let week_end = cal.end_of_week(cursor);
        if MonthBin::of(week_end) != MonthBin::of(cursor) {
            // the remainder opens the next bucket on the 1st
            cal.end_of_month(cursor)
        } else {
            week_end
        }
    }
}

/// How the monthly splitter reports its pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthlyMode {
    /// Calendar months, flagged full when uncut.
    #[default]
    Calendar,
    /// Same cuts, but the pieces are raw spans feeding a coarser view;
    /// none of them counts as a full unit.
    RawSpan,
}

#[derive(Default)]
pub struct MonthlyStrategy {
    pub mode: MonthlyMode,
}

impl MonthlyStrategy {
    pub fn new(mode: MonthlyMode) -> Self {
        Self { mode }
    }
}

impl BoundaryStrategy for MonthlyStrategy {
    fn granularity(&self) -> Granularity {
        Granularity::Month
    }

    fn natural_span(&self, cal: &dyn Calendar, instant: Instant) -> (Instant, Instant) {
        (cal.start_of_month(instant), cal.end_of_month(instant))
    }

    fn marks_full_units(&self) -> bool {
        self.mode == MonthlyMode::Calendar
    }
}
