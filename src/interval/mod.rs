pub mod aggregator;
pub mod dispatcher;
pub mod label;
pub mod range;
pub mod splitter;
pub mod types;

pub use aggregator::{
    KeyedBucket, KeyedIndex, MergeSource, get_keyed_index, get_keyed_index_with,
};
pub use dispatcher::{buckets_for, get_buckets, get_buckets_from_strs, get_buckets_with};
pub use label::{Label, LabelStyle};
pub use range::{DateRange, NamedRange};
pub use types::{Bucket, BucketKey, DayRange, Granularity, MonthBin};
