//! Assembles page groups into a numbered object graph.

use crate::config::LayoutConfig;
use crate::content::{ContentStreamBuilder, FONT_RESOURCE_NAME};
use crate::document::{Document, DocumentInfo};
use crate::error::{PdfError, Result, Stage};
use crate::objects::{Dictionary, Object, ObjectId, Stream};

/// Stand-in for the font reference until the font object exists.
const PENDING_FONT: ObjectId = ObjectId::new(0, 0);

/// Builds a [`Document`] from paginated lines.
///
/// Objects are appended in a fixed order: catalog (1), page tree (2), then a
/// content stream followed by its page for each page group, then the shared
/// font, and finally the info dictionary when one is set.
pub struct ObjectGraphBuilder<'a> {
    config: &'a LayoutConfig,
    info: Option<DocumentInfo>,
}

impl<'a> ObjectGraphBuilder<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config, info: None }
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn build(&self, pages: &[Vec<String>]) -> Result<Document> {
        let mut document = Document::new();
        let catalog_id = document.reserve();
        let pages_id = document.reserve();

        let content = ContentStreamBuilder::new(self.config);
        let mut page_ids = Vec::with_capacity(pages.len());
        for (index, lines) in pages.iter().enumerate() {
            let stream = Stream::new(content.build(index, lines)?);
            let content_id = document.add_object(stream);
            let page_id = document.add_object(self.page_dictionary(pages_id, content_id));
            page_ids.push(page_id);
        }

        let font_id = document.add_object(self.font_dictionary());
        for &page_id in &page_ids {
            let page = document.object_mut(page_id).ok_or_else(|| {
                PdfError::invariant(Stage::ObjectGraph, format!("page {page_id} disappeared"))
            })?;
            patch_font_reference(page, font_id)?;
        }

        let mut page_tree = Dictionary::new();
        page_tree.set("Type", Object::name("Pages"));
        page_tree.set(
            "Kids",
            page_ids.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
        );
        page_tree.set("Count", page_ids.len() as i64);
        document.set_object(pages_id, page_tree)?;

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", pages_id);
        document.set_object(catalog_id, catalog)?;
        document.set_root(catalog_id);

        if let Some(info) = self.info.as_ref().filter(|info| !info.is_empty()) {
            let info_id = document.add_object(info.to_dictionary());
            document.set_info(info_id);
        }

        document.validate()?;
        tracing::debug!(
            pages = page_ids.len(),
            objects = document.len(),
            font = %self.config.font,
            "built object graph"
        );
        Ok(document)
    }

    fn page_dictionary(&self, parent: ObjectId, contents: ObjectId) -> Dictionary {
        let mut font = Dictionary::new();
        font.set(FONT_RESOURCE_NAME, PENDING_FONT);
        let mut resources = Dictionary::new();
        resources.set("Font", font);

        let mut page = Dictionary::new();
        page.set("Type", Object::name("Page"));
        page.set("Parent", parent);
        page.set(
            "MediaBox",
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.config.page_width),
                Object::Real(self.config.page_height),
            ],
        );
        page.set("Resources", resources);
        page.set("Contents", contents);
        page
    }

    fn font_dictionary(&self) -> Dictionary {
        let mut font = Dictionary::new();
        font.set("Type", Object::name("Font"));
        font.set("Subtype", Object::name("Type1"));
        font.set("BaseFont", Object::name(self.config.font.pdf_name()));
        font.set("Encoding", Object::name("WinAnsiEncoding"));
        font
    }
}

fn patch_font_reference(page: &mut Object, font_id: ObjectId) -> Result<()> {
    let slot = page
        .as_dict_mut()
        .and_then(|page| page.get_mut("Resources"))
        .and_then(Object::as_dict_mut)
        .and_then(|resources| resources.get_mut("Font"))
        .and_then(Object::as_dict_mut)
        .and_then(|fonts| fonts.get_mut(FONT_RESOURCE_NAME))
        .ok_or_else(|| {
            PdfError::invariant(Stage::ObjectGraph, "page has no font resource slot")
        })?;

    if slot.as_reference() != Some(PENDING_FONT) {
        return Err(PdfError::invariant(
            Stage::ObjectGraph,
            "font resource was already resolved",
        ));
    }
    *slot = Object::Reference(font_id);
    Ok(())
}
