use tracing::debug;

use crate::interval::splitter::{self, MonthlyMode, MonthlyStrategy, split_range};
use crate::interval::types::{Bucket, BucketKey, Granularity};
use crate::shared::datetime::{Calendar, GregorianCalendar, InputError, Instant};

/// Split `[start, end]` by a named granularity using the Gregorian calendar.
///
/// Unknown names yield an empty vector; callers treat that as "no data".
pub fn get_buckets(granularity: &str, start: Instant, end: Instant) -> Vec<Bucket> {
    get_buckets_with(&GregorianCalendar, granularity, start, end)
}

pub fn get_buckets_with(
    cal: &dyn Calendar,
    granularity: &str,
    start: Instant,
    end: Instant,
) -> Vec<Bucket> {
    match Granularity::from_name(granularity) {
        Some(g) => buckets_for(cal, g, start, end),
        None => {
            debug!(target: "snel_intervals::dispatch", granularity, "Unrecognized granularity, returning no buckets");
            Vec::new()
        }
    }
}

/// Parse both bounds first, then dispatch. Nothing is split unless both parse.
pub fn get_buckets_from_strs(
    granularity: &str,
    start: &str,
    end: &str,
) -> Result<Vec<Bucket>, InputError> {
    let cal = GregorianCalendar;
    let start = cal.parse_datetime(start)?;
    let end = cal.parse_datetime(end)?;
    Ok(get_buckets_with(&cal, granularity, start, end))
}

/// Dispatch an already resolved granularity.
pub fn buckets_for(cal: &dyn Calendar, granularity: Granularity, start: Instant, end: Instant) -> Vec<Bucket> {
    debug!(target: "snel_intervals::dispatch", %granularity, %start, %end, "Dispatching split");
    match granularity {
        Granularity::Year => yearly(cal, start, end),
        Granularity::Total => total(cal, start, end),
        calendar_unit => splitter::split(calendar_unit, cal, start, end).unwrap_or_default(),
    }
}

/// Monthly pieces re-keyed to January 1st of their year. Merging happens in the aggregator.
fn yearly(cal: &dyn Calendar, start: Instant, end: Instant) -> Vec<Bucket> {
    split_range(&MonthlyStrategy::new(MonthlyMode::RawSpan), cal, start, end)
        .into_iter()
        .map(|mut bucket| {
            bucket.granularity = Granularity::Year;
            bucket.identity_key = BucketKey::At(cal.start_of_year(bucket.start));
            bucket
        })
        .collect()
}

/// Monthly pieces all keyed to the single Total anchor.
fn total(cal: &dyn Calendar, start: Instant, end: Instant) -> Vec<Bucket> {
    split_range(&MonthlyStrategy::new(MonthlyMode::RawSpan), cal, start, end)
        .into_iter()
        .map(|mut bucket| {
            bucket.granularity = Granularity::Total;
            bucket.identity_key = BucketKey::Total;
            bucket
        })
        .collect()
}
