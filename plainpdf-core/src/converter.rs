//! End-to-end conversion: lines in, document out.

use crate::builder::ObjectGraphBuilder;
use crate::config::LayoutConfig;
use crate::document::{write_file, Document, DocumentInfo};
use crate::error::Result;
use crate::input::{read_lines, split_lines};
use crate::pagination::Paginator;
use crate::text::LineWrapper;
use std::path::Path;

/// Chains wrapping, pagination and object graph assembly.
///
/// # Example
///
/// ```rust
/// use plainpdf::{DocumentInfo, LayoutConfig, TextConverter};
///
/// # fn main() -> plainpdf::Result<()> {
/// let converter = TextConverter::new(LayoutConfig::default().with_lines_per_page(40))?
///     .with_info(DocumentInfo {
///         title: Some("Release notes".to_string()),
///         ..DocumentInfo::default()
///     });
///
/// let document = converter.convert_str("Version 2\n\nFixed the (old) bug.\n")?;
/// assert!(document.info().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TextConverter {
    config: LayoutConfig,
    wrapper: LineWrapper,
    paginator: Paginator,
    info: Option<DocumentInfo>,
}

/// What [`TextConverter::convert_file`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    pub lines: usize,
    pub pages: usize,
    pub objects: usize,
    pub bytes: usize,
}

impl TextConverter {
    /// Fails with `InvalidConfiguration` if `config` cannot lay out a page.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        let wrapper = LineWrapper::new(config.wrap_width)?;
        let paginator = Paginator::new(config.lines_per_page)?;
        Ok(Self {
            config,
            wrapper,
            paginator,
            info: None,
        })
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn convert_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<Document> {
        let physical = self.wrapper.wrap_lines(lines);
        let pages = self.paginator.paginate(&physical);

        let mut builder = ObjectGraphBuilder::new(&self.config);
        if let Some(info) = &self.info {
            builder = builder.with_info(info.clone());
        }
        builder.build(&pages)
    }

    pub fn convert_str(&self, text: &str) -> Result<Document> {
        self.convert_lines(&split_lines(text))
    }

    /// Reads `input`, converts it and saves the result to `output`.
    pub fn convert_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ConversionReport> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let lines = read_lines(input)?;
        let document = self.convert_lines(&lines)?;
        let bytes = document.to_bytes()?;
        write_file(output, &bytes)?;

        let report = ConversionReport {
            lines: lines.len(),
            pages: document.page_ids()?.len(),
            objects: document.len(),
            bytes: bytes.len(),
        };
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            pages = report.pages,
            bytes = report.bytes,
            "converted"
        );
        Ok(report)
    }
}
