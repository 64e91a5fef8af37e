use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::interval::{Bucket, KeyedIndex, LabelStyle};
use crate::shared::response::json::JsonRenderer;
use crate::shared::response::text::TextRenderer;

/// Layout instants are written in, in every output format.
pub const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

/// A trait that defines how bucket output is serialized for a given surface.
pub trait Renderer: Send + Sync {
    /// Render an aggregated index, labels in the given style.
    fn render_index(&self, index: &KeyedIndex, style: LabelStyle) -> Vec<u8>;

    /// Render raw splitter output.
    fn render_buckets(&self, buckets: &[Bucket]) -> Vec<u8>;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Text => Box::new(TextRenderer),
    }
}
