//! Text operators for a single page.

use crate::config::LayoutConfig;
use crate::error::{PdfError, Result};
use crate::objects::format_number;
use crate::text::{encode_win_ansi, escape_literal};

/// Resource name under which every page registers the shared font.
pub const FONT_RESOURCE_NAME: &str = "F1";

/// Builds the content stream of one page: a single text object that sets
/// font, origin and leading once, then shows each line and advances with
/// `T*` between lines.
pub struct ContentStreamBuilder<'a> {
    config: &'a LayoutConfig,
}

impl<'a> ContentStreamBuilder<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Encodes `lines` for the page at `page_index` (0-based). The returned
    /// bytes are the exact stream payload.
    pub fn build(&self, page_index: usize, lines: &[String]) -> Result<Vec<u8>> {
        let mut operations = Vec::with_capacity(64 + lines.len() * 24);

        operations.extend_from_slice(b"BT\n");
        operations.extend_from_slice(
            format!(
                "/{} {} Tf\n{} {} Td\n{} TL\n",
                FONT_RESOURCE_NAME,
                format_number(self.config.font_size),
                format_number(self.config.left_margin),
                format_number(self.config.top_offset),
                format_number(self.config.leading),
            )
            .as_bytes(),
        );

        for (line_index, line) in lines.iter().enumerate() {
            if line_index > 0 {
                operations.extend_from_slice(b"T*\n");
            }
            let encoded = encode_win_ansi(&escape_literal(line)).map_err(|character| {
                PdfError::EncodingError {
                    page: page_index + 1,
                    line: line_index + 1,
                    character,
                }
            })?;
            operations.push(b'(');
            operations.extend_from_slice(&encoded);
            operations.extend_from_slice(b") Tj\n");
        }

        operations.extend_from_slice(b"ET\n");
        Ok(operations)
    }
}
