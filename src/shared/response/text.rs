use crate::interval::{Bucket, KeyedIndex, LabelStyle};
use crate::shared::response::render::{INSTANT_FORMAT, Renderer};

/// Tab-separated lines, one per entry.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_index(&self, index: &KeyedIndex, style: LabelStyle) -> Vec<u8> {
        let mut output = Vec::new();
        for entry in index.values() {
            output.extend_from_slice(
                format!(
                    "{}\t{}\t{}\t{}\n",
                    entry.key,
                    entry.label_for(style),
                    entry.span_start.format(INSTANT_FORMAT),
                    entry.span_end.format(INSTANT_FORMAT)
                )
                .as_bytes(),
            );
        }
        output
    }

    fn render_buckets(&self, buckets: &[Bucket]) -> Vec<u8> {
        let mut output = Vec::new();
        for bucket in buckets {
            output.extend_from_slice(
                format!(
                    "{}\t{}\t{}\t{}\t{}\n",
                    bucket.granularity,
                    bucket.identity_key,
                    bucket.start.format(INSTANT_FORMAT),
                    bucket.end.format(INSTANT_FORMAT),
                    if bucket.is_full_unit { "full" } else { "partial" }
                )
                .as_bytes(),
            );
        }
        output
    }
}
