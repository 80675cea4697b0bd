//! # plainpdf
//!
//! Converts plain text into small, self-contained PDF files without any
//! external PDF library.
//!
//! ## Features
//!
//! - **Deterministic layout**: fixed-width line wrapping and fixed page
//!   capacity, so the same input always produces the same bytes
//! - **Minimal object graph**: one catalog, one page tree, a content stream
//!   and page object per page, one shared standard font
//! - **Exact cross-reference table**: offsets are counted while writing
//! - **Strict encoding**: text is written as WinAnsi; characters outside it
//!   are reported with their page and line instead of being replaced
//! - **Batch conversion** on a pool of worker threads
//!
//! ## Quick Start
//!
//! ```rust
//! use plainpdf::{LayoutConfig, Result, TextConverter};
//!
//! # fn main() -> Result<()> {
//! let converter = TextConverter::new(LayoutConfig::default())?;
//! let document = converter.convert_lines(&["Hello, PDF!", "", "cost (was $5)"])?;
//!
//! let bytes = document.to_bytes()?;
//! assert!(bytes.ends_with(b"%%EOF\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`text::LineWrapper`] splits long lines at the last space before the
//!    wrap width
//! 2. [`pagination::Paginator`] groups physical lines into pages
//! 3. [`builder::ObjectGraphBuilder`] turns page groups into a numbered
//!    [`Document`]
//! 4. [`writer::PdfWriter`] serializes it with xref table and trailer
//!
//! [`TextConverter`] chains all four.

pub mod batch;
pub mod builder;
pub mod config;
pub mod content;
pub mod converter;
pub mod document;
pub mod error;
pub mod input;
pub mod objects;
pub mod pagination;
pub mod text;
pub mod writer;

pub use builder::ObjectGraphBuilder;
pub use config::LayoutConfig;
pub use converter::{ConversionReport, TextConverter};
pub use document::{Document, DocumentInfo, SerializedDocument};
pub use error::{PdfError, Result, Stage};
pub use objects::{Dictionary, Object, ObjectId, Stream};
pub use pagination::Paginator;
pub use text::{escape_literal, LineWrapper, StandardFont};
pub use writer::{CrossReferenceTable, PdfWriter, Trailer};

/// Current version of plainpdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
