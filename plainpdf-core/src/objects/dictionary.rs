use crate::objects::Object;
use indexmap::IndexMap;

/// PDF dictionary whose entries are written in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    entries: IndexMap<String, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets `key`; an existing key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter()
    }

    pub fn get_dict(&self, key: &str) -> Option<&Dictionary> {
        self.get(key).and_then(|obj| {
            if let Object::Dictionary(dict) = obj {
                Some(dict)
            } else {
                None
            }
        })
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Page"));
        dict.set("Count", 42);

        assert_eq!(dict.get("Type"), Some(&Object::Name("Page".to_string())));
        assert_eq!(dict.get("Count"), Some(&Object::Integer(42)));
        assert_eq!(dict.get("Missing"), None);
        assert!(dict.contains_key("Type"));
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Page"));
        dict.set("Parent", 2);
        dict.set("MediaBox", vec![Object::Integer(0)]);
        dict.set("Contents", 4);

        let keys: Vec<&str> = dict.entries().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["Type", "Parent", "MediaBox", "Contents"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut dict = Dictionary::new();
        dict.set("Length", 0);
        dict.set("Filter", Object::name("None"));
        dict.set("Length", 128);

        let entries: Vec<_> = dict.entries().collect();
        assert_eq!(entries[0].0, "Length");
        assert_eq!(entries[0].1, &Object::Integer(128));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_get_mut() {
        let mut dict = Dictionary::new();
        dict.set("Count", 1);

        if let Some(Object::Integer(val)) = dict.get_mut("Count") {
            *val = 2;
        }

        assert_eq!(dict.get("Count"), Some(&Object::Integer(2)));
    }

    #[test]
    fn test_get_dict() {
        let mut resources = Dictionary::new();
        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(crate::objects::ObjectId::new(9, 0)));
        resources.set("Font", fonts);
        resources.set("ProcSet", Object::name("Text"));

        assert!(resources.get_dict("Font").is_some());
        assert!(resources.get_dict("ProcSet").is_none());
        assert!(resources.get_dict("Missing").is_none());
    }

    #[test]
    fn test_from_iterator() {
        let dict: Dictionary = vec![
            ("Type".to_string(), Object::name("Font")),
            ("Subtype".to_string(), Object::name("Type1")),
        ]
        .into_iter()
        .collect();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("Subtype"), Some(&Object::Name("Type1".to_string())));
    }
}
