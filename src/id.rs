/// Owned string for debug/display purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringId {
    text: String,
}

impl StringId {
    pub fn from_str(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Get the string content.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Handle the layout engine uses to find an element again, e.g. a scroll container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementId {
    pub id: u32,
    pub string_id: StringId,
}

impl ElementId {
    /// Hashes `label` the way the layout engine does for named elements.
    #[inline]
    pub fn new(label: &str) -> ElementId {
        hash_string(label, 0)
    }
}

impl From<&str> for ElementId {
    fn from(label: &str) -> Self {
        ElementId::new(label)
    }
}

/// Jenkins one-at-a-time hash of `key`, the layout engine's element id function.
pub fn hash_string(key: &str, seed: u32) -> ElementId {
    let mut hash: u32 = seed;
    for b in key.bytes() {
        hash = hash.wrapping_add(b as u32);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);
    ElementId {
        id: hash.wrapping_add(1),
        string_id: StringId::from_str(key),
    }
}
