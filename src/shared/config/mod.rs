pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{LoggingConfig, OutputConfig, Settings, load_settings, load_settings_from};
