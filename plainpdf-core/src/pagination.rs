use crate::config::DEFAULT_LINES_PER_PAGE;
use crate::error::{PdfError, Result};
use std::num::NonZeroUsize;

/// Groups physical lines into pages of a fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    lines_per_page: NonZeroUsize,
}

impl Paginator {
    pub fn new(lines_per_page: usize) -> Result<Self> {
        let lines_per_page = NonZeroUsize::new(lines_per_page).ok_or_else(|| {
            PdfError::InvalidConfiguration("lines per page must be at least 1".to_string())
        })?;
        Ok(Self { lines_per_page })
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page.get()
    }

    /// Splits `lines` into consecutive pages, keeping order. An empty input
    /// still yields one (empty) page.
    pub fn paginate(&self, lines: &[String]) -> Vec<Vec<String>> {
        if lines.is_empty() {
            return vec![Vec::new()];
        }

        let pages: Vec<Vec<String>> = lines
            .chunks(self.lines_per_page.get())
            .map(<[String]>::to_vec)
            .collect();
        tracing::debug!(
            lines = lines.len(),
            pages = pages.len(),
            lines_per_page = self.lines_per_page.get(),
            "paginated lines"
        );
        pages
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            lines_per_page: NonZeroUsize::new(DEFAULT_LINES_PER_PAGE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
