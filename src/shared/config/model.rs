use serde::Deserialize;
use std::env;

use crate::interval::LabelStyle;
use crate::shared::response::OutputFormat;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// File logging is off unless a directory is given
    #[serde(default)]
    pub log_dir: Option<String>,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

fn default_stdout_level() -> String {
    "warn".to_string()
}

fn default_file_level() -> String {
    "info".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub label_style: LabelStyle,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("SNEL_INTERVALS_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Defaults, then the optional file at `path`, then `SNEL_INTERVALS__*` overrides.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .set_default("logging.stdout_level", default_stdout_level())?
        .set_default("logging.file_level", default_file_level())?
        .set_default("output.format", "json")?
        .set_default("output.label_style", "plain")?
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("SNEL_INTERVALS").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
