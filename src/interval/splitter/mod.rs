mod strategies;

pub use strategies::{
    BoundaryStrategy, DailyStrategy, HourlyStrategy, MonthlyMode, MonthlyStrategy, WeeklyStrategy,
};

use chrono::{Datelike, Duration};
use tracing::{debug, trace};

use crate::interval::types::{Bucket, BucketKey, DayRange, Granularity, MonthBin};
use crate::shared::datetime::{Calendar, Instant, truncate_subsec};

/// Split `[start, end]` into contiguous buckets using `strategy`'s boundaries.
///
/// Buckets come out in strictly increasing `start` order and cover the range
/// exactly; the last one is clipped to `end`. An inverted range yields nothing,
/// a single-instant range yields one bucket.
pub fn split_range<S>(strategy: &S, cal: &dyn Calendar, start: Instant, end: Instant) -> Vec<Bucket>
where
    S: BoundaryStrategy + ?Sized,
{
    let start = truncate_subsec(start);
    let end = truncate_subsec(end);
    if end < start {
        trace!(target: "snel_intervals::split", %start, %end, "Inverted range, nothing to split");
        return Vec::new();
    }

    let mut buckets = Vec::new();
    let mut cursor = start;
    loop {
        let natural_end = strategy.unit_end(cal, cursor);
        buckets.push(build_bucket(strategy, cal, cursor, natural_end.min(end)));
        if natural_end >= end {
            break;
        }
        // natural_end < end, so this cannot leave the calendar range
        cursor = natural_end + Duration::seconds(1);
    }

    debug!(
        target: "snel_intervals::split",
        granularity = %strategy.granularity(),
        %start,
        %end,
        count = buckets.len(),
        "Split range"
    );
    buckets
}

fn build_bucket<S>(strategy: &S, cal: &dyn Calendar, start: Instant, end: Instant) -> Bucket
where
    S: BoundaryStrategy + ?Sized,
{
    let (unit_start, unit_end) = strategy.natural_span(cal, start);
    Bucket {
        granularity: strategy.granularity(),
        start,
        end,
        identity_key: BucketKey::At(unit_start),
        month_bin: MonthBin::of(start),
        day_numbers: DayRange::between(start.day(), end.day()),
        is_full_unit: strategy.marks_full_units() && start == unit_start && end == unit_end,
    }
}

/// Run the splitter for one of the four calendar granularities.
/// Derived granularities (Year, Total) have no splitter of their own.
pub fn split(granularity: Granularity, cal: &dyn Calendar, start: Instant, end: Instant) -> Option<Vec<Bucket>> {
    let buckets = match granularity {
        Granularity::Hour => split_range(&HourlyStrategy, cal, start, end),
        Granularity::Day => split_range(&DailyStrategy, cal, start, end),
        Granularity::Week => split_range(&WeeklyStrategy, cal, start, end),
        Granularity::Month => split_range(&MonthlyStrategy::default(), cal, start, end),
        Granularity::Year | Granularity::Total => return None,
    };
    Some(buckets)
}
