//! Layout parameters shared by every stage of the conversion.

use crate::error::{PdfError, Result};
use crate::text::{StandardFont, DEFAULT_WRAP_WIDTH};

/// Default page capacity in physical lines.
pub const DEFAULT_LINES_PER_PAGE: usize = 52;

/// Page geometry, typography and line-breaking parameters.
///
/// All lengths are in points (1/72 inch) with the origin at the bottom-left
/// corner of the page. The defaults reproduce a US Letter page with 10 pt
/// Helvetica on 14 pt leading, 92 columns and 52 lines per page.
///
/// # Example
///
/// ```rust
/// use plainpdf::{LayoutConfig, StandardFont};
///
/// let config = LayoutConfig::default()
///     .with_font(StandardFont::Courier, 9.0)
///     .with_wrap_width(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct LayoutConfig {
    pub page_width: f64,
    pub page_height: f64,
    /// Distance of the text origin from the left edge.
    pub left_margin: f64,
    /// Baseline of the first line, measured from the bottom edge.
    pub top_offset: f64,
    pub font: StandardFont,
    pub font_size: f64,
    /// Baseline-to-baseline distance used by `T*`.
    pub leading: f64,
    /// Maximum characters per physical line.
    pub wrap_width: usize,
    /// Maximum physical lines per page.
    pub lines_per_page: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            left_margin: 50.0,
            top_offset: 790.0,
            font: StandardFont::Helvetica,
            font_size: 10.0,
            leading: 14.0,
            wrap_width: DEFAULT_WRAP_WIDTH,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
        }
    }
}

impl LayoutConfig {
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    pub fn with_text_origin(mut self, left_margin: f64, top_offset: f64) -> Self {
        self.left_margin = left_margin;
        self.top_offset = top_offset;
        self
    }

    pub fn with_font(mut self, font: StandardFont, size: f64) -> Self {
        self.font = font;
        self.font_size = size;
        self
    }

    pub fn with_leading(mut self, leading: f64) -> Self {
        self.leading = leading;
        self
    }

    pub fn with_wrap_width(mut self, columns: usize) -> Self {
        self.wrap_width = columns;
        self
    }

    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines;
        self
    }

    /// Checks that every parameter can produce a readable page.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("page width", self.page_width),
            ("page height", self.page_height),
            ("font size", self.font_size),
            ("leading", self.leading),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PdfError::InvalidConfiguration(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let finite = [("left margin", self.left_margin), ("top offset", self.top_offset)];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PdfError::InvalidConfiguration(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.wrap_width == 0 {
            return Err(PdfError::InvalidConfiguration(
                "wrap width must be at least 1".to_string(),
            ));
        }
        if self.lines_per_page == 0 {
            return Err(PdfError::InvalidConfiguration(
                "lines per page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
