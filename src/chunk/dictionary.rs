use ahash::AHashMap;

/// Maps distinct strings to dense codes assigned in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    ids: AHashMap<String, usize>,
    keys: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code of `value`, assigning the next one if it is new.
    pub fn intern(&mut self, value: &str) -> usize {
        if let Some(&id) = self.ids.get(value) {
            return id;
        }
        let id = self.keys.len();
        self.keys.push(value.to_string());
        self.ids.insert(value.to_string(), id);
        id
    }

    /// Code of `value` if present. Does not insert.
    pub fn id(&self, value: &str) -> Option<usize> {
        self.ids.get(value).copied()
    }

    pub fn lookup_id(&self, id: usize) -> Option<&str> {
        self.keys.get(id).map(String::as_str)
    }

    /// Distinct values indexed by code.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Drops every entry and releases storage.
    pub fn clear(&mut self) {
        self.ids = AHashMap::new();
        self.keys = Vec::new();
    }
}
