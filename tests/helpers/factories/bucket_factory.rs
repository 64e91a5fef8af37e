use chrono::Datelike;

use super::datetime_factory::DateTimeFactory;
use crate::interval::types::{Bucket, BucketKey, DayRange, Granularity, MonthBin};
use crate::shared::datetime::Instant;

pub struct BucketFactory {
    granularity: Granularity,
    start: Instant,
    end: Instant,
    key: Option<BucketKey>,
    full_unit: bool,
}

impl BucketFactory {
    pub fn new() -> Self {
        Self {
            granularity: Granularity::Day,
            start: DateTimeFactory::date(2024, 3, 1),
            end: DateTimeFactory::end_of_date(2024, 3, 1),
            key: None,
            full_unit: false,
        }
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_span(mut self, start: Instant, end: Instant) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_key(mut self, key: BucketKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_key_at(self, key: Instant) -> Self {
        self.with_key(BucketKey::At(key))
    }

    pub fn full_unit(mut self, full: bool) -> Self {
        self.full_unit = full;
        self
    }

    /// Key defaults to the bucket start.
    pub fn create(self) -> Bucket {
        Bucket {
            granularity: self.granularity,
            start: self.start,
            end: self.end,
            identity_key: self.key.unwrap_or(BucketKey::At(self.start)),
            month_bin: MonthBin::of(self.start),
            day_numbers: DayRange::between(self.start.day(), self.end.day()),
            is_full_unit: self.full_unit,
        }
    }
}
