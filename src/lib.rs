pub mod interval;
pub mod logging;
pub mod shared;

pub use interval::{
    Bucket, BucketKey, Granularity, KeyedBucket, KeyedIndex, LabelStyle, get_buckets,
    get_buckets_from_strs, get_keyed_index,
};
pub use shared::datetime::{Calendar, GregorianCalendar, InputError, Instant};

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
