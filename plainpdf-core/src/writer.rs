use crate::document::{check_stream_length, Document};
use crate::error::{PdfError, Result, Stage};
use crate::objects::{format_number, Dictionary, Object, ObjectId};
use crate::text::escape_literal;
use std::io::Write;

mod xref;

pub use xref::{CrossReferenceTable, Trailer};

/// Renders a [`Document`] into PDF bytes, counting every byte it emits so
/// the cross-reference offsets always point at the `N 0 obj` line.
pub struct PdfWriter<W: Write> {
    writer: W,
    xref: CrossReferenceTable,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref: CrossReferenceTable::new(),
            current_position: 0,
        }
    }

    /// Writes header, objects, xref table and trailer. The document is
    /// validated first, so a broken graph never produces a single byte.
    pub fn write_document(&mut self, document: &Document) -> Result<Trailer> {
        document.validate()?;
        let root = document.root().ok_or_else(|| {
            PdfError::invariant(Stage::Serialization, "document has no catalog")
        })?;

        self.write_header()?;
        for (id, object) in document.iter() {
            self.write_object(id, object)?;
        }

        let xref_offset = self.current_position;
        self.write_xref()?;

        let trailer = Trailer {
            size: self.xref.len(),
            root,
            info: document.info(),
            xref_offset,
        };
        self.write_trailer(&trailer)?;
        self.writer.flush()?;

        tracing::debug!(
            objects = self.xref.object_count(),
            bytes = self.current_position,
            "serialized document"
        );
        Ok(trailer)
    }

    pub fn xref(&self) -> &CrossReferenceTable {
        &self.xref
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> u64 {
        self.current_position
    }

    pub fn into_parts(self) -> (W, CrossReferenceTable) {
        (self.writer, self.xref)
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.4\n")?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        let expected = self.xref.object_count() as u32 + 1;
        if id.number() != expected || id.generation() != 0 {
            return Err(PdfError::invariant(
                Stage::Serialization,
                format!("object {id} written out of order, expected {expected} 0 R"),
            ));
        }
        check_stream_length(id, object)?;

        self.xref.record(self.current_position);
        tracing::trace!(object = id.number(), offset = self.current_position, "writing object");

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        match object {
            Object::Stream(dict, data) => {
                self.write_dictionary(dict)?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                if !data.ends_with(b"\n") {
                    self.write_bytes(b"\n")?;
                }
                self.write_bytes(b"endstream")?;
            }
            other => self.write_object_value(other)?,
        }

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => {
                if !f.is_finite() {
                    return Err(PdfError::invariant(
                        Stage::Serialization,
                        format!("cannot write non-finite number {f}"),
                    ));
                }
                self.write_bytes(format_number(*f).as_bytes())?
            }
            Object::String(s) => self.write_string(s)?,
            Object::Name(n) => self.write_name(n)?,
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => self.write_dictionary(dict)?,
            Object::Stream(..) => {
                return Err(PdfError::invariant(
                    Stage::Serialization,
                    "streams can only appear as indirect objects",
                ));
            }
            Object::Reference(id) => {
                let ref_str = format!("{} {} R", id.number(), id.generation());
                self.write_bytes(ref_str.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_dictionary(&mut self, dict: &Dictionary) -> Result<()> {
        self.write_bytes(b"<<")?;
        for (key, value) in dict.entries() {
            self.write_bytes(b" ")?;
            self.write_name(key)?;
            self.write_bytes(b" ")?;
            self.write_object_value(value)?;
        }
        self.write_bytes(b" >>")?;
        Ok(())
    }

    fn write_name(&mut self, name: &str) -> Result<()> {
        let mut encoded = Vec::with_capacity(name.len() + 1);
        encoded.push(b'/');
        for &byte in name.as_bytes() {
            let delimiter = matches!(
                byte,
                b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
            );
            if (b'!'..=b'~').contains(&byte) && !delimiter {
                encoded.push(byte);
            } else {
                encoded.extend_from_slice(format!("#{byte:02X}").as_bytes());
            }
        }
        self.write_bytes(&encoded)
    }

    /// Printable ASCII goes out as an escaped literal; anything else as a
    /// UTF-16BE hex string with byte order mark.
    fn write_string(&mut self, value: &str) -> Result<()> {
        if value.bytes().all(|byte| (b' '..=b'~').contains(&byte)) {
            self.write_bytes(b"(")?;
            self.write_bytes(escape_literal(value).as_bytes())?;
            self.write_bytes(b")")?;
        } else {
            let mut hex = String::with_capacity(6 + value.len() * 4);
            hex.push_str("<FEFF");
            for unit in value.encode_utf16() {
                hex.push_str(&format!("{unit:04X}"));
            }
            hex.push('>');
            self.write_bytes(hex.as_bytes())?;
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;
        self.write_bytes(format!("0 {}\n", self.xref.len()).as_bytes())?;

        // Write free object entry
        self.write_bytes(b"0000000000 65535 f \n")?;

        let entries: String = self
            .xref
            .offsets()
            .iter()
            .map(|position| format!("{:010} {:05} n \n", position, 0))
            .collect();
        self.write_bytes(entries.as_bytes())?;
        Ok(())
    }

    fn write_trailer(&mut self, trailer: &Trailer) -> Result<()> {
        self.write_bytes(b"trailer\n")?;
        self.write_dictionary(&trailer.to_dictionary())?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(trailer.xref_offset.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}
