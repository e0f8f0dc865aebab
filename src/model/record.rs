use super::property::Property;

/// Ordered field mapping attached to a [`Record`].
///
/// Insertion order is the order fields are written back out. Inserting a
/// name that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn property(&self, property: Property) -> Option<&str> {
        self.get(property.canonical_name())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

/// One SD file entry: the structure block plus its data fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Header, counts, atom and bond blocks, kept byte for byte.
    pub payload: String,
    pub fields: Fields,
}

impl Record {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            fields: Fields::new(),
        }
    }

    /// The molecule name, if the record carries one.
    pub fn name(&self) -> Option<&str> {
        self.fields
            .property(Property::Name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// A human-readable label: the name when present, else `#<index>`.
    pub fn label(&self, index: usize) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!("#{}", index + 1),
        }
    }
}
