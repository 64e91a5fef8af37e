pub mod bucket_factory;
pub mod datetime_factory;

pub use bucket_factory::BucketFactory;
pub use datetime_factory::DateTimeFactory;

#[cfg(test)]
mod bucket_factory_test;
#[cfg(test)]
mod datetime_factory_test;
