use crate::objects::{Dictionary, Object, ObjectId};

/// Byte offsets of every indirect object, in object-number order.
///
/// Entry 0 is the head of the free list and is implied; `len()` counts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReferenceTable {
    offsets: Vec<u64>,
}

impl CrossReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the offset of the next object and returns its number.
    pub(crate) fn record(&mut self, offset: u64) -> u32 {
        self.offsets.push(offset);
        self.offsets.len() as u32
    }

    /// Number of table entries, including the free entry 0.
    pub fn len(&self) -> usize {
        self.offsets.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn object_count(&self) -> usize {
        self.offsets.len()
    }

    /// Offset at which object `id` begins, if it was written.
    pub fn offset(&self, id: ObjectId) -> Option<u64> {
        let index = (id.number() as usize).checked_sub(1)?;
        self.offsets.get(index).copied()
    }

    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }
}

/// Trailer data: table size, document root, optional info dictionary and
/// the offset of the `xref` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailer {
    pub size: usize,
    pub root: ObjectId,
    pub info: Option<ObjectId>,
    pub xref_offset: u64,
}

impl Trailer {
    pub fn to_dictionary(&self) -> Dictionary {
        let mut trailer = Dictionary::new();
        trailer.set("Size", self.size as i64);
        trailer.set("Root", Object::Reference(self.root));
        if let Some(info) = self.info {
            trailer.set("Info", Object::Reference(info));
        }
        trailer
    }
}
