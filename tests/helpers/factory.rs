pub use super::factories::BucketFactory;

pub struct Factory;

impl Factory {
    pub fn bucket() -> BucketFactory {
        BucketFactory::new()
    }
}
