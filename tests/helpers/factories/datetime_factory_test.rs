use super::datetime_factory::DateTimeFactory;
use chrono::{Datelike, Timelike, Weekday};

#[test]
fn test_at() {
    let dt = DateTimeFactory::at(2024, 1, 15, 12, 30, 45);

    assert_eq!(dt.year(), 2024);
    assert_eq!(dt.month(), 1);
    assert_eq!(dt.day(), 15);
    assert_eq!(dt.hour(), 12);
    assert_eq!(dt.minute(), 30);
    assert_eq!(dt.second(), 45);
}

#[test]
fn test_date_and_end_of_date() {
    let start = DateTimeFactory::date(2024, 1, 15);
    let end = DateTimeFactory::end_of_date(2024, 1, 15);

    assert_eq!(start.hour(), 0);
    assert_eq!(end.hour(), 23);
    assert_eq!(end.second(), 59);
    assert_eq!(start.date(), end.date());
}

#[test]
fn test_weekday() {
    let dt = DateTimeFactory::weekday(2024, 3, 28, Weekday::Thu);
    assert_eq!(dt.weekday(), Weekday::Thu);
    assert_eq!(dt.hour(), 12);
}

#[test]
#[should_panic]
fn test_weekday_mismatch_panics() {
    DateTimeFactory::weekday(2024, 3, 28, Weekday::Mon);
}
