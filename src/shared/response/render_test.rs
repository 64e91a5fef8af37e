use super::json::error_body;
use super::render::{OutputFormat, renderer_for};
use crate::interval::{Bucket, LabelStyle, get_buckets, get_keyed_index};
use crate::test_helpers::factories::DateTimeFactory;
use indoc::indoc;
use serde_json::{Value, json};

fn week_index() -> crate::interval::KeyedIndex {
    get_keyed_index(get_buckets(
        "week",
        DateTimeFactory::date(2024, 3, 25),
        DateTimeFactory::end_of_date(2024, 3, 31),
    ))
}

#[test]
fn output_format_parses_names() {
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert!("arrow".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
    assert_eq!(OutputFormat::Text.to_string(), "text");
}

#[test]
fn json_index_carries_count_and_entries() {
    let bytes = renderer_for(OutputFormat::Json).render_index(&week_index(), LabelStyle::Markup);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        value,
        json!({
            "count": 1,
            "results": [{
                "key": "2024-03-25 00:00:00",
                "label": "Week 13 2024 <br />25/03 - 31/03",
                "granularity": "week",
                "start": "2024-03-25 00:00:00",
                "end": "2024-03-31 23:59:59"
            }]
        })
    );
}

#[test]
fn json_buckets_expose_month_days_and_full_unit() {
    let buckets = get_buckets(
        "week",
        DateTimeFactory::date(2024, 2, 26),
        DateTimeFactory::end_of_date(2024, 3, 3),
    );
    let bytes = renderer_for(OutputFormat::Json).render_buckets(&buckets);
    let value: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["count"], json!(2));
    assert_eq!(
        value["results"][1],
        json!({
            "granularity": "week",
            "key": "2024-02-26 00:00:00",
            "start": "2024-03-01 00:00:00",
            "end": "2024-03-03 23:59:59",
            "month": "2024-03",
            "days": [1, 3],
            "full_unit": false
        })
    );
}

#[test]
fn json_of_empty_index_has_zero_count() {
    let bytes = renderer_for(OutputFormat::Json)
        .render_index(&get_keyed_index(Vec::<Bucket>::new()), LabelStyle::Plain);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({ "count": 0, "results": [] }));
}

#[test]
fn text_index_is_one_tab_separated_line_per_entry() {
    let index = get_keyed_index(get_buckets(
        "day",
        DateTimeFactory::date(2024, 3, 4),
        DateTimeFactory::end_of_date(2024, 3, 5),
    ));
    let bytes = renderer_for(OutputFormat::Text).render_index(&index, LabelStyle::Plain);
    let expected = indoc! {"
        2024-03-04 00:00:00\tMon 04\t2024-03-04 00:00:00\t2024-03-04 23:59:59
        2024-03-05 00:00:00\tTue 05\t2024-03-05 00:00:00\t2024-03-05 23:59:59
    "};
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn text_buckets_mark_partial_units() {
    let buckets = get_buckets(
        "hour",
        DateTimeFactory::at(2024, 3, 5, 8, 15, 0),
        DateTimeFactory::at(2024, 3, 5, 9, 59, 59),
    );
    let bytes = renderer_for(OutputFormat::Text).render_buckets(&buckets);
    let expected = indoc! {"
        hour\t2024-03-05 08:00:00\t2024-03-05 08:15:00\t2024-03-05 08:59:59\tpartial
        hour\t2024-03-05 09:00:00\t2024-03-05 09:00:00\t2024-03-05 09:59:59\tfull
    "};
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn json_error_body_escapes_the_message() {
    let bytes = error_body("key \"2024\" is not\na number");
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({ "error": "key \"2024\" is not\na number" }));
}
