use crate::error::{PdfError, Result, Stage};
use crate::objects::{Dictionary, Object, ObjectId};
use crate::writer::{CrossReferenceTable, PdfWriter, Trailer};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An ordered list of indirect objects plus the trailer references.
///
/// Object `N` lives at position `N - 1`; numbers are handed out strictly in
/// append order and never reused. References between objects are plain
/// [`ObjectId`]s, resolved by the writer.
///
/// # Example
///
/// ```rust
/// use plainpdf::{LayoutConfig, TextConverter};
///
/// # fn main() -> plainpdf::Result<()> {
/// let converter = TextConverter::new(LayoutConfig::default())?;
/// let document = converter.convert_lines(&["Hello, PDF!"])?;
///
/// assert_eq!(document.page_ids()?.len(), 1);
/// let bytes = document.to_bytes()?;
/// assert!(bytes.starts_with(b"%PDF-1.4\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
    root: Option<ObjectId>,
    info: Option<ObjectId>,
}

/// Output of [`Document::serialize`]: the file bytes together with the
/// offset table and trailer recorded while writing them.
#[derive(Debug, Clone)]
pub struct SerializedDocument {
    pub bytes: Vec<u8>,
    pub xref: CrossReferenceTable,
    pub trailer: Trailer,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object and returns its number.
    pub fn add_object(&mut self, object: impl Into<Object>) -> ObjectId {
        self.objects.push(object.into());
        ObjectId::new(self.objects.len() as u32, 0)
    }

    /// Appends an empty slot to be filled later with [`Document::set_object`].
    pub fn reserve(&mut self) -> ObjectId {
        self.add_object(Object::Null)
    }

    /// Replaces the body of an existing object, keeping its number.
    pub fn set_object(&mut self, id: ObjectId, object: impl Into<Object>) -> Result<()> {
        let slot = self.object_mut(id).ok_or_else(|| {
            PdfError::invariant(
                Stage::ObjectGraph,
                format!("cannot replace object {id}: no such object"),
            )
        })?;
        *slot = object.into();
        Ok(())
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        if id.generation() != 0 {
            return None;
        }
        let index = (id.number() as usize).checked_sub(1)?;
        self.objects.get(index)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        if id.generation() != 0 {
            return None;
        }
        let index = (id.number() as usize).checked_sub(1)?;
        self.objects.get_mut(index)
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Objects paired with their numbers, in writing order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId::new(index as u32 + 1, 0), object))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn set_root(&mut self, catalog: ObjectId) {
        self.root = Some(catalog);
    }

    pub fn root(&self) -> Option<ObjectId> {
        self.root
    }

    pub fn set_info(&mut self, info: ObjectId) {
        self.info = Some(info);
    }

    pub fn info(&self) -> Option<ObjectId> {
        self.info
    }

    /// Page objects in reading order, following catalog → page tree → kids.
    pub fn page_ids(&self) -> Result<Vec<ObjectId>> {
        let tree = self.page_tree()?;
        let kids = tree
            .get("Kids")
            .and_then(Object::as_array)
            .ok_or_else(|| graph_error("page tree has no /Kids array"))?;
        kids.iter()
            .map(|kid| {
                kid.as_reference()
                    .ok_or_else(|| graph_error("page tree kid is not a reference"))
            })
            .collect()
    }

    fn page_tree(&self) -> Result<&Dictionary> {
        let root = self
            .root
            .ok_or_else(|| graph_error("document has no catalog"))?;
        let catalog = self
            .object(root)
            .and_then(Object::as_dict)
            .ok_or_else(|| graph_error(format!("catalog {root} is not a dictionary")))?;
        if catalog.get("Type").and_then(Object::as_name) != Some("Catalog") {
            return Err(graph_error(format!("object {root} is not a /Catalog")));
        }
        let tree_id = catalog
            .get("Pages")
            .and_then(Object::as_reference)
            .ok_or_else(|| graph_error("catalog has no /Pages reference"))?;
        self.object(tree_id)
            .and_then(Object::as_dict)
            .ok_or_else(|| graph_error(format!("page tree {tree_id} is not a dictionary")))
    }

    /// Checks every structural invariant the writer relies on: all reserved
    /// slots filled, every reference resolvable, each stream length exact
    /// and the page tree count consistent with its kids.
    pub fn validate(&self) -> Result<()> {
        for (id, object) in self.iter() {
            if object.is_null() {
                return Err(graph_error(format!("object {id} was reserved but never filled")));
            }
            self.check_references(id, object)?;
            check_stream_length(id, object)?;
        }

        if let Some(info) = self.info {
            if self.object(info).and_then(Object::as_dict).is_none() {
                return Err(graph_error(format!("info {info} is not a dictionary")));
            }
        }

        let tree = self.page_tree()?;
        let kids = self.page_ids()?;
        let count = tree.get("Count").and_then(Object::as_integer);
        if count != Some(kids.len() as i64) {
            return Err(graph_error(format!(
                "page tree /Count is {count:?} but it has {} kids",
                kids.len()
            )));
        }
        Ok(())
    }

    fn check_references(&self, owner: ObjectId, object: &Object) -> Result<()> {
        match object {
            Object::Reference(target) => {
                if self.object(*target).is_none() {
                    return Err(graph_error(format!(
                        "object {owner} references missing object {target}"
                    )));
                }
            }
            Object::Array(items) => {
                for item in items {
                    self.check_references(owner, item)?;
                }
            }
            Object::Dictionary(dict) | Object::Stream(dict, _) => {
                for (_, value) in dict.entries() {
                    self.check_references(owner, value)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Serializes the whole document in memory.
    pub fn serialize(&self) -> Result<SerializedDocument> {
        let mut writer = PdfWriter::new_with_writer(Vec::new());
        let trailer = writer.write_document(self)?;
        let (bytes, xref) = writer.into_parts();
        Ok(SerializedDocument {
            bytes,
            xref,
            trailer,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.serialize()?.bytes)
    }

    /// Writes the finished file to `sink`. Nothing reaches the sink unless
    /// the whole document serialized successfully.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<CrossReferenceTable> {
        let serialized = self.serialize()?;
        sink.write_all(&serialized.bytes)?;
        sink.flush()?;
        Ok(serialized.xref)
    }

    /// Saves the document to `path`. If writing fails after the file was
    /// created, the partial file is removed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        write_file(path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved document");
        Ok(())
    }
}

/// Writes finished bytes to disk, removing the file again if the write
/// fails part way.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let written = writer.write_all(bytes).and_then(|()| writer.flush());
    drop(writer);

    if let Err(error) = written {
        if let Err(cleanup) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), %cleanup, "could not remove partial output");
        }
        return Err(error.into());
    }
    Ok(())
}

fn graph_error(message: impl Into<String>) -> PdfError {
    PdfError::invariant(Stage::ObjectGraph, message)
}

/// Fails when a stream's declared `/Length` differs from its payload size.
pub(crate) fn check_stream_length(id: ObjectId, object: &Object) -> Result<()> {
    if let Object::Stream(dict, data) = object {
        let declared = dict.get("Length").and_then(Object::as_integer);
        if declared != Some(data.len() as i64) {
            return Err(PdfError::invariant(
                Stage::Serialization,
                format!(
                    "stream object {} declares /Length {} but carries {} bytes",
                    id.number(),
                    declared.map_or_else(|| "(missing)".to_string(), |n| n.to_string()),
                    data.len()
                ),
            ));
        }
    }
    Ok(())
}

/// Optional document information dictionary.
///
/// Only written when at least one field is set, so the default output
/// carries no timestamps and stays byte-for-byte reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Software that created the original text
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    pub fn is_empty(&self) -> bool {
        self == &DocumentInfo::default()
    }

    pub fn to_dictionary(&self) -> Dictionary {
        let mut info = Dictionary::new();
        let text_fields = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                info.set(key, Object::String(value.clone()));
            }
        }
        if let Some(date) = self.creation_date {
            info.set("CreationDate", Object::String(format_pdf_date(date)));
        }
        info
    }
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm)
fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");

    // For UTC, the offset is always +00'00
    format!("{formatted}+00'00")
}
