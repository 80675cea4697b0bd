use crate::error::{PdfError, Result};
use std::num::NonZeroUsize;

/// Default wrap width in columns.
pub const DEFAULT_WRAP_WIDTH: usize = 92;

/// Splits logical lines into physical lines no wider than a fixed column
/// count. Widths are counted in characters; no font metrics are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrapper {
    width: NonZeroUsize,
}

impl LineWrapper {
    pub fn new(width: usize) -> Result<Self> {
        let width = NonZeroUsize::new(width).ok_or_else(|| {
            PdfError::InvalidConfiguration("wrap width must be at least 1".to_string())
        })?;
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width.get()
    }

    /// Wraps one logical line. The result is never empty.
    ///
    /// A line that already fits is returned unchanged. Longer lines break at
    /// the last space before the width boundary, or exactly at the boundary
    /// when there is no such space. Pieces carry no leading or trailing
    /// whitespace.
    pub fn wrap(&self, line: &str) -> Vec<String> {
        let width = self.width.get();
        if line.chars().count() <= width {
            return vec![line.to_string()];
        }

        let mut pieces = Vec::new();
        let mut rest = line.trim();
        while rest.chars().count() > width {
            let boundary = byte_offset(rest, width);
            let cut = match rest[..boundary].rfind(' ') {
                Some(space) if space > 0 => space,
                _ => boundary,
            };
            pieces.push(rest[..cut].trim_end().to_string());
            rest = rest[cut..].trim_start();
        }
        if !rest.is_empty() || pieces.is_empty() {
            pieces.push(rest.to_string());
        }
        pieces
    }

    /// Prepares a whole input: blank and whitespace-only lines become a
    /// single empty line, every other line is wrapped.
    pub fn wrap_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut physical = Vec::with_capacity(lines.len());
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                physical.push(String::new());
            } else {
                physical.extend(self.wrap(line));
            }
        }
        tracing::debug!(
            logical = lines.len(),
            physical = physical.len(),
            width = self.width.get(),
            "wrapped input lines"
        );
        physical
    }
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self {
            width: NonZeroUsize::new(DEFAULT_WRAP_WIDTH).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Byte offset of the `chars`-th character of `text`.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}
