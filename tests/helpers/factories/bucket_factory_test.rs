use crate::interval::types::{BucketKey, DayRange, Granularity, MonthBin};
use crate::test_helpers::factories::DateTimeFactory;
use crate::test_helpers::factory::Factory;

#[test]
fn test_bucket_factory_defaults() {
    let bucket = Factory::bucket().create();

    assert_eq!(bucket.granularity, Granularity::Day);
    assert_eq!(bucket.start, DateTimeFactory::date(2024, 3, 1));
    assert_eq!(bucket.identity_key, BucketKey::At(bucket.start));
    assert_eq!(bucket.month_bin, MonthBin { year: 2024, month: 3 });
    assert_eq!(bucket.day_numbers, DayRange::single(1));
    assert!(!bucket.is_full_unit);
}

#[test]
fn test_bucket_factory_overrides() {
    let bucket = Factory::bucket()
        .with_granularity(Granularity::Week)
        .with_span(
            DateTimeFactory::date(2024, 2, 26),
            DateTimeFactory::end_of_date(2024, 2, 29),
        )
        .with_key(BucketKey::Total)
        .full_unit(true)
        .create();

    assert_eq!(bucket.granularity, Granularity::Week);
    assert_eq!(bucket.identity_key, BucketKey::Total);
    assert_eq!(bucket.day_numbers, DayRange::between(26, 29));
    assert!(bucket.is_full_unit);
}
