use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use tracing::debug;

use crate::interval::label::{Label, LabelStyle};
use crate::interval::types::{Bucket, BucketKey};
use crate::shared::datetime::{Calendar, GregorianCalendar, Instant};

/// Ordered mapping of key string to its merged entry, ascending by key instant.
pub type KeyedIndex = IndexMap<String, KeyedBucket>;

/// One display-ready period: every raw bucket sharing a key, merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedBucket {
    pub key: String,
    pub key_instant: Instant,
    pub span_start: Instant,
    pub span_end: Instant,
    pub label: String,
    pub label_with_break: String,
    pub label_no_break: String,
    /// First bucket seen for this key.
    pub source_bucket: Bucket,
}

impl KeyedBucket {
    pub fn label_for(&self, style: LabelStyle) -> &str {
        match style {
            LabelStyle::Plain => &self.label,
            LabelStyle::Markup => &self.label_with_break,
            LabelStyle::Newline => &self.label_no_break,
        }
    }
}

/// Anything the aggregator can merge: raw splitter output, or entries of an
/// existing index. Re-merging an index keeps each entry's span and source bucket.
pub trait MergeSource {
    fn identity_key(&self) -> BucketKey;

    /// Inclusive `(start, end)` this item contributes to its key.
    fn span(&self) -> (Instant, Instant);

    fn into_source(self) -> Bucket;
}

impl MergeSource for Bucket {
    fn identity_key(&self) -> BucketKey {
        self.identity_key
    }

    fn span(&self) -> (Instant, Instant) {
        (self.start, self.end)
    }

    fn into_source(self) -> Bucket {
        self
    }
}

impl MergeSource for KeyedBucket {
    fn identity_key(&self) -> BucketKey {
        self.source_bucket.identity_key
    }

    fn span(&self) -> (Instant, Instant) {
        (self.span_start, self.span_end)
    }

    fn into_source(self) -> Bucket {
        self.source_bucket
    }
}

struct MergedSpan {
    span_start: Instant,
    span_end: Instant,
    source: Bucket,
}

/// Merge buckets by identity key, label them and order them chronologically.
pub fn get_keyed_index<I, T>(buckets: I) -> KeyedIndex
where
    I: IntoIterator<Item = T>,
    T: MergeSource,
{
    get_keyed_index_with(&GregorianCalendar, buckets)
}

pub fn get_keyed_index_with<I, T>(cal: &dyn Calendar, buckets: I) -> KeyedIndex
where
    I: IntoIterator<Item = T>,
    T: MergeSource,
{
    let mut merged: IndexMap<BucketKey, MergedSpan> = IndexMap::new();
    let mut seen = 0usize;

    for item in buckets {
        seen += 1;
        let (start, end) = item.span();
        match merged.entry(item.identity_key()) {
            Entry::Occupied(mut slot) => {
                // span_start stays with the first bucket; the end only moves forward
                let span = slot.get_mut();
                span.span_end = span.span_end.max(end);
            }
            Entry::Vacant(slot) => {
                slot.insert(MergedSpan {
                    span_start: start,
                    span_end: end,
                    source: item.into_source(),
                });
            }
        }
    }

    let mut index: KeyedIndex = merged
        .into_iter()
        .map(|(key, span)| {
            let entry = keyed_entry(cal, key, span);
            (entry.key.clone(), entry)
        })
        .collect();
    index.sort_by(|_, a, _, b| a.key_instant.cmp(&b.key_instant));

    debug!(
        target: "snel_intervals::aggregate",
        buckets = seen,
        entries = index.len(),
        "Aggregated buckets"
    );
    index
}

fn keyed_entry(cal: &dyn Calendar, key: BucketKey, span: MergedSpan) -> KeyedBucket {
    let label = Label::compute(
        cal,
        span.source.granularity,
        &key,
        span.span_start,
        span.span_end,
    );
    KeyedBucket {
        key: key.to_string(),
        // Total has no anchor of its own; it sorts by where its span begins
        key_instant: key.instant().unwrap_or(span.span_start),
        span_start: span.span_start,
        span_end: span.span_end,
        label: label.render(LabelStyle::Plain),
        label_with_break: label.render(LabelStyle::Markup),
        label_no_break: label.render(LabelStyle::Newline),
        source_bucket: span.source,
    }
}
