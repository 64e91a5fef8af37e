use serde::Serialize;
use serde_json::json;

use crate::interval::{Bucket, Granularity, KeyedIndex, LabelStyle};
use crate::shared::response::render::{INSTANT_FORMAT, Renderer};

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonResponse<'a, T> {
    count: usize,
    results: &'a [T],
}

#[derive(Serialize)]
struct IndexEntry<'a> {
    key: &'a str,
    label: &'a str,
    granularity: Granularity,
    start: String,
    end: String,
}

#[derive(Serialize)]
struct BucketEntry {
    granularity: Granularity,
    key: String,
    start: String,
    end: String,
    month: String,
    days: [u32; 2],
    full_unit: bool,
}

fn to_json_bytes<T: Serialize>(results: &[T]) -> Vec<u8> {
    let response = JsonResponse {
        count: results.len(),
        results,
    };
    serde_json::to_vec(&response).unwrap_or_else(|e| error_body(&e.to_string()))
}

pub(crate) fn error_body(message: &str) -> Vec<u8> {
    json!({ "error": message }).to_string().into_bytes()
}

impl Renderer for JsonRenderer {
    fn render_index(&self, index: &KeyedIndex, style: LabelStyle) -> Vec<u8> {
        let entries: Vec<IndexEntry<'_>> = index
            .values()
            .map(|e| IndexEntry {
                key: &e.key,
                label: e.label_for(style),
                granularity: e.source_bucket.granularity,
                start: e.span_start.format(INSTANT_FORMAT).to_string(),
                end: e.span_end.format(INSTANT_FORMAT).to_string(),
            })
            .collect();
        to_json_bytes(&entries)
    }

    fn render_buckets(&self, buckets: &[Bucket]) -> Vec<u8> {
        let entries: Vec<BucketEntry> = buckets
            .iter()
            .map(|b| BucketEntry {
                granularity: b.granularity,
                key: b.key_string(),
                start: b.start.format(INSTANT_FORMAT).to_string(),
                end: b.end.format(INSTANT_FORMAT).to_string(),
                month: b.month_bin.to_string(),
                days: [b.day_numbers.first, b.day_numbers.last],
                full_unit: b.is_full_unit,
            })
            .collect();
        to_json_bytes(&entries)
    }
}
