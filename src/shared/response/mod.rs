pub mod json;
pub mod render;
pub mod text;

pub use json::JsonRenderer;
pub use render::{OutputFormat, Renderer, renderer_for};
pub use text::TextRenderer;

#[cfg(test)]
mod render_test;
